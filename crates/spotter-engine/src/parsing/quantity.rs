//! Quantity sub-grammars.
//!
//! Each grammar takes case-preserved movement text (load already lifted out)
//! and returns the quantity plus the remaining name. [`extract`] tries them in
//! a fixed order; the first hit wins.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::models::Quantity;

const UNIT: &str = r"(?P<unit>minutes|minute|mins|min|meters|meter|metres|metre|km|m|calories|calorie|cals|cal|seconds|second|secs|sec|s)";

static SETS_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<sets>\d{1,3})\s*(?:x|sets?\s+(?:of|x))\s*(?P<rest>.+)$")
        .expect("Invalid sets prefix regex")
});

static QUANTITY_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^(?P<value>\d+(?:\.\d+)?)\s*{UNIT}\b\.?\s+(?P<rest>.+)$"
    ))
    .expect("Invalid quantity-first regex")
});

static CLOCK_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<min>\d{1,2}):(?P<sec>[0-5]\d)\s+(?P<rest>.+)$")
        .expect("Invalid clock-first regex")
});

static REPS_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<value>\d+)\s*(?:reps?\b)?\s+(?P<rest>.+)$")
        .expect("Invalid reps-first regex")
});

static QUANTITY_LAST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^(?P<rest>.+?)\s*[-:,@]?\s+(?P<value>\d+(?:\.\d+)?)\s*{UNIT}\.?$"
    ))
    .expect("Invalid quantity-last regex")
});

static SETS_LAST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<rest>.+?)\s*[-:,]?\s+(?P<sets>\d{1,3})\s*x\s*(?P<reps>\d+)$")
        .expect("Invalid sets-last regex")
});

static TIMES_LAST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<rest>.+?)\s*[-:,]?\s*\bx\s*(?P<value>\d+)$")
        .expect("Invalid times-last regex")
});

static REPS_LAST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<rest>.+?)\s*[-:,]?\s+(?P<value>\d+)\s*reps?$")
        .expect("Invalid reps-last regex")
});

static CLOCK_LAST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<rest>.+?)\s*[-:,]?\s+(?P<min>\d{1,2}):(?P<sec>[0-5]\d)$")
        .expect("Invalid clock-last regex")
});

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:(?P<min>\d{1,2}):(?P<sec>[0-5]\d)|(?P<value>\d+(?:\.\d+)?)\s*(?P<unit>minutes|minute|mins|min|m|seconds|second|secs|sec|s)?\b)",
    )
    .expect("Invalid duration regex")
});

/// A quantity and the movement name left over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub quantity: Quantity,
    pub sets: Option<u32>,
    pub name: String,
}

type Grammar = fn(&str) -> Option<Extracted>;

/// Grammars in the order they are tried.
const GRAMMARS: &[(&str, Grammar)] = &[
    ("sets-prefix", sets_prefix),
    ("quantity-first", quantity_first),
    ("clock-first", clock_first),
    ("reps-first", reps_first),
    ("quantity-last", quantity_last),
    ("sets-last", sets_last),
    ("reps-last", reps_last),
    ("clock-last", clock_last),
];

pub fn extract(text: &str) -> Option<Extracted> {
    let text = text.trim();
    GRAMMARS.iter().find_map(|(name, grammar)| {
        let hit = grammar(text)?;
        log::trace!("quantity grammar {name} matched {text:?}");
        Some(hit)
    })
}

/// Builds a quantity from a number and a unit word. `km` becomes meters and
/// fractional minutes become seconds.
pub fn quantity_from_unit(value: &str, unit: &str) -> Option<Quantity> {
    let value: f64 = value.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let whole = |v: f64| v.round() as u32;
    let quantity = match unit.to_ascii_lowercase().as_str() {
        "km" => Quantity::Meters(whole(value * 1000.0)),
        "m" | "meter" | "meters" | "metre" | "metres" => Quantity::Meters(whole(value)),
        "cal" | "cals" | "calorie" | "calories" => Quantity::Calories(whole(value)),
        "min" | "mins" | "minute" | "minutes" => {
            if value.fract() == 0.0 {
                Quantity::Minutes(whole(value))
            } else {
                Quantity::Seconds(whole(value * 60.0))
            }
        }
        "s" | "sec" | "secs" | "second" | "seconds" => Quantity::Seconds(whole(value)),
        _ => return None,
    };
    Some(quantity)
}

/// First duration in `text`, in seconds. `1:30`, `90s`, `2 min`; a bare number is seconds.
pub fn parse_duration(text: &str) -> Option<u32> {
    let caps = DURATION.captures(text)?;
    if let (Some(min), Some(sec)) = (caps.name("min"), caps.name("sec")) {
        let min: u32 = min.as_str().parse().ok()?;
        let sec: u32 = sec.as_str().parse().ok()?;
        return Some(min * 60 + sec);
    }
    let value = caps.name("value")?.as_str();
    let unit = caps.name("unit").map(|u| u.as_str()).unwrap_or("s");
    let unit = if unit.eq_ignore_ascii_case("m") { "min" } else { unit };
    quantity_from_unit(value, unit)?.as_seconds()
}

/// Trims separators and dangling connectors left around a movement name.
pub fn clean_name(name: &str) -> String {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
    let trimmed = collapsed
        .trim_matches(|c: char| {
            c.is_whitespace() || matches!(c, '-' | ':' | ',' | ';' | '@' | '.' | '/' | '|')
        });
    let trimmed = trimmed
        .strip_prefix("of ")
        .or_else(|| trimmed.strip_prefix("Of "))
        .unwrap_or(trimmed);
    trimmed.trim().to_string()
}

fn name_from(caps: &Captures<'_>) -> Option<String> {
    let name = clean_name(caps.name("rest")?.as_str());
    if name.is_empty() || name.chars().all(|c| c.is_ascii_digit() || c.is_whitespace()) {
        return None;
    }
    Some(name)
}

fn number(caps: &Captures<'_>, group: &str) -> Option<u32> {
    caps.name(group)?.as_str().parse().ok()
}

fn clock(caps: &Captures<'_>) -> Option<Quantity> {
    let min = number(caps, "min")?;
    let sec = number(caps, "sec")?;
    Some(Quantity::Seconds(min * 60 + sec))
}

/// `3x10 Push-ups`, `3 sets of 10 Push-ups`, `5 x 400m Row`.
pub fn sets_prefix(text: &str) -> Option<Extracted> {
    let caps = SETS_PREFIX.captures(text)?;
    let count = number(&caps, "sets")?;
    let rest = caps.name("rest")?.as_str().trim();

    let inner = quantity_first(rest)
        .or_else(|| clock_first(rest))
        .or_else(|| reps_first(rest));
    match inner {
        Some(inner) => Some(Extracted {
            sets: Some(count),
            ..inner
        }),
        // `10 x Burpees`: the multiplier is the rep count.
        None => Some(Extracted {
            quantity: Quantity::Reps(count),
            sets: None,
            name: name_from(&caps)?,
        }),
    }
}

/// `400m Row`, `20 cal Bike`, `1.5 km Run`, `30 sec Plank`.
pub fn quantity_first(text: &str) -> Option<Extracted> {
    let caps = QUANTITY_FIRST.captures(text)?;
    Some(Extracted {
        quantity: quantity_from_unit(caps.name("value")?.as_str(), caps.name("unit")?.as_str())?,
        sets: None,
        name: name_from(&caps)?,
    })
}

/// `1:30 Plank`.
pub fn clock_first(text: &str) -> Option<Extracted> {
    let caps = CLOCK_FIRST.captures(text)?;
    Some(Extracted {
        quantity: clock(&caps)?,
        sets: None,
        name: name_from(&caps)?,
    })
}

/// `20 Wall Balls`, `10 reps Burpees`.
pub fn reps_first(text: &str) -> Option<Extracted> {
    let caps = REPS_FIRST.captures(text)?;
    let name = name_from(&caps)?;
    if matches!(name.to_lowercase().as_str(), "rep" | "reps" | "x") {
        return None;
    }
    Some(Extracted {
        quantity: Quantity::Reps(number(&caps, "value")?),
        sets: None,
        name,
    })
}

/// `Run 400m`, `Plank - 60 sec`.
pub fn quantity_last(text: &str) -> Option<Extracted> {
    let caps = QUANTITY_LAST.captures(text)?;
    Some(Extracted {
        quantity: quantity_from_unit(caps.name("value")?.as_str(), caps.name("unit")?.as_str())?,
        sets: None,
        name: name_from(&caps)?,
    })
}

/// `Push-ups 3x10`, and `Burpees x 10` without a set count.
pub fn sets_last(text: &str) -> Option<Extracted> {
    if let Some(caps) = SETS_LAST.captures(text) {
        return Some(Extracted {
            quantity: Quantity::Reps(number(&caps, "reps")?),
            sets: Some(number(&caps, "sets")?),
            name: name_from(&caps)?,
        });
    }
    let caps = TIMES_LAST.captures(text)?;
    Some(Extracted {
        quantity: Quantity::Reps(number(&caps, "value")?),
        sets: None,
        name: name_from(&caps)?,
    })
}

/// `Burpees 10 reps`.
pub fn reps_last(text: &str) -> Option<Extracted> {
    let caps = REPS_LAST.captures(text)?;
    Some(Extracted {
        quantity: Quantity::Reps(number(&caps, "value")?),
        sets: None,
        name: name_from(&caps)?,
    })
}

/// `Plank 1:30`.
pub fn clock_last(text: &str) -> Option<Extracted> {
    let caps = CLOCK_LAST.captures(text)?;
    Some(Extracted {
        quantity: clock(&caps)?,
        sets: None,
        name: name_from(&caps)?,
    })
}
