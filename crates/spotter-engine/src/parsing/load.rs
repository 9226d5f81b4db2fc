//! Load extraction, run before the quantity grammars.
//!
//! The weight span is lifted out of the line so `2x 50lb DB Thrusters` leaves
//! `DB Thrusters` for the quantity and name passes. Implement keywords stay in
//! the name; they are detected anywhere in the line.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Implement, Load, WeightUnit};

static WEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:@\s*)?(?:\b(?P<pairs>\d{1,2})\s*x\s*)?\b(?P<amount>\d+(?:\.\d+)?)(?:\s*/\s*(?P<scaled>\d+(?:\.\d+)?))?\s*(?:(?P<unit>kgs?|kilos?|lbs?|pounds?)\b|(?P<hash>#))",
    )
    .expect("Invalid weight regex")
});

static INCHES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:@\s*)?(?P<measure>\b\d+(?:\s*/\s*\d+)?\s*(?:inches|inch|"))(?P<object>\s+box\b)?"#)
        .expect("Invalid inches regex")
});

static IMPLEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?P<kb>kettlebells?|kbs?)\b|\b(?P<db>dumbbells?|dbs?)\b|\b(?P<bb>barbells?|bbs?)\b|\b(?P<sb>sandbags?|sbs?)\b|\b(?P<mb>medicine\s+balls?|med\s+balls?|mbs?)\b|\b(?P<vest>(?:weighted\s+)?vest)\b",
    )
    .expect("Invalid implement regex")
});

static DANGLING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\(\s*\)|\[\s*\])|(?:\s+(?:at|with|using|w/))+\s*$|^\s*(?:at|with|using|w/)\s+")
        .expect("Invalid dangling connector regex")
});

/// A load and the line with its weight span removed.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadMatch {
    pub load: Load,
    /// The removed span as written, e.g. `2x 50lb`.
    pub text: String,
    pub remainder: String,
}

/// First implement keyword in `text`.
pub fn detect_implement(text: &str) -> Option<Implement> {
    let caps = IMPLEMENT.captures(text)?;
    let implement = if caps.name("kb").is_some() {
        Implement::Kettlebell
    } else if caps.name("db").is_some() {
        Implement::Dumbbell
    } else if caps.name("bb").is_some() {
        Implement::Barbell
    } else if caps.name("sb").is_some() {
        Implement::Sandbag
    } else if caps.name("mb").is_some() {
        Implement::MedicineBall
    } else {
        Implement::Bodyweight
    };
    Some(implement)
}

fn vest_phrase(text: &str) -> Option<String> {
    IMPLEMENT
        .captures_iter(text)
        .find_map(|c| c.name("vest").map(|m| m.as_str().to_lowercase()))
}

fn tidy(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let stripped = DANGLING.replace_all(&collapsed, "");
    stripped
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, '@' | '-' | ',' | ':' | '/'))
        .to_string()
}

fn remove_span(line: &str, start: usize, end: usize) -> String {
    tidy(&format!("{} {}", &line[..start], &line[end..]))
}

/// Lifts the first load out of `line`. Lines without weight, inch spec or vest return `None`.
pub fn extract_load(line: &str) -> Option<LoadMatch> {
    if let Some(caps) = WEIGHT.captures(line) {
        let whole = caps.get(0)?;
        let amount = caps.name("amount")?;
        let unit = match caps.name("unit") {
            Some(u) if u.as_str().to_ascii_lowercase().starts_with('k') => WeightUnit::Kg,
            _ => WeightUnit::Lb,
        };
        let implement = detect_implement(line);
        // Only handheld pairs take a count; `3x 100kg Deadlift` keeps its set count.
        let paired = matches!(
            implement,
            Some(Implement::Dumbbell | Implement::Kettlebell)
        );
        let paired_count = caps
            .name("pairs")
            .filter(|_| paired)
            .and_then(|p| p.as_str().parse().ok());
        let start = if caps.name("pairs").is_some() && !paired {
            amount.start()
        } else {
            whole.start()
        };
        let load = Load::Weight {
            amount: amount.as_str().parse().ok()?,
            scaled_amount: caps.name("scaled").and_then(|s| s.as_str().parse().ok()),
            unit,
            paired_count,
            implement,
        };
        return Some(LoadMatch {
            load,
            text: line[start..whole.end()]
                .trim_start_matches('@')
                .trim()
                .to_string(),
            remainder: remove_span(line, start, whole.end()),
        });
    }

    if let Some(caps) = INCHES.captures(line) {
        let measure = caps.name("measure")?;
        let number = measure
            .as_str()
            .trim_end_matches(|c: char| c.is_alphabetic() || c == '"')
            .trim();
        let object = caps.name("object").map(|o| o.as_str().trim().to_lowercase());
        let text = match object {
            Some(object) => format!("{number} inch {object}"),
            None => format!("{number} inch"),
        };
        let whole = caps.get(0)?;
        // Drop the trailing `box` too when the name already mentions one.
        let without_object = remove_span(line, whole.start(), whole.end());
        let remainder = if caps.name("object").is_some()
            && without_object.to_lowercase().contains("box")
        {
            without_object
        } else {
            remove_span(line, whole.start(), measure.end())
        };
        return Some(LoadMatch {
            load: Load::Freeform { text: text.clone() },
            text,
            remainder,
        });
    }

    let vest = vest_phrase(line)?;
    Some(LoadMatch {
        load: Load::Implement {
            implement: Implement::Bodyweight,
            freeform: Some(vest.clone()),
        },
        text: vest,
        remainder: tidy(line),
    })
}
