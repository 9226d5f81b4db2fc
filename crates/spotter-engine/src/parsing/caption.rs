//! Caption-wide facts: title, scoring, time cap and scaling.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Scaling, ScalingSide, Scoring};

use super::normalize::NormalizedLine;

static TITLE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:title|workout|wod)\s*[:\-]\s*(?P<title>.+)$").expect("Invalid title regex")
});

static TIME_CAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"time\s*cap(?:\s*(?:of|is|:|-))?\s*(?P<value>\d+)\s*(?P<unit>minutes|minute|mins|min|seconds|second|secs|sec)?\b|(?P<value2>\d+)\s*(?:minutes|minute|mins|min)\s*(?:time\s*)?cap\b",
    )
    .expect("Invalid time cap regex")
});

static SCORE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bfor time\b|score is (?:total )?time").expect("Invalid time scoring regex")
});

static SCORE_ROUNDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bamrap\b|as many (?:rounds|reps) as possible|score is (?:total )?rounds")
        .expect("Invalid rounds scoring regex")
});

static SCORE_REPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bfor reps\b|\bmax reps\b|score is (?:total )?reps").expect("Invalid reps scoring regex")
});

static SCALING_LOAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\((?P<side>m|men|male|f|w|women|female)\)\s*(?:rx\s*)?[:\-]?\s*(?P<value>[^()]+)",
    )
    .expect("Invalid scaling regex")
});

static BOX_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?P<value>\d+(?:\s*/\s*\d+)?\s*(?:inch(?:es)?|")(?:\s+box)?)"#)
        .expect("Invalid box hint regex")
});

static METADATA_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\btime\s*cap\b|\bcap\s*:|\d+\s*(?:minutes|minute|mins|min)\s*cap\b|^\((?:m|men|male|f|w|women|female)\)|^(?:rx|scaled|score|scoring)\b",
    )
    .expect("Invalid metadata line regex")
});

/// Facts scanned over the whole caption rather than line by line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptionFacts {
    pub scoring: Option<Scoring>,
    pub cap_seconds: Option<u32>,
    pub scaling: Option<Scaling>,
}

/// Title from a `Title:`/`WOD:` line, or a digit-free first line ending with `:`.
pub fn title_from(line: &NormalizedLine) -> Option<String> {
    if let Some(caps) = TITLE_PREFIX.captures(&line.display) {
        let title = caps.name("title")?.as_str().trim();
        return (!title.is_empty()).then(|| title.to_string());
    }
    let display = line.display.trim();
    if display.len() > 1 && display.ends_with(':') && !display.chars().any(|c| c.is_ascii_digit())
    {
        return Some(display.trim_end_matches(':').trim().to_string());
    }
    None
}

/// Lines that only carry caption metadata (time cap, scaling, score).
pub fn is_metadata_line(text: &str) -> bool {
    METADATA_LINE.is_match(text)
}

pub fn scan(lines: &[NormalizedLine]) -> CaptionFacts {
    let text = lines
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    CaptionFacts {
        scoring: scoring(&text),
        cap_seconds: cap_seconds(&text),
        scaling: scaling(lines),
    }
}

fn scoring(text: &str) -> Option<Scoring> {
    if SCORE_TIME.is_match(text) {
        Some(Scoring::Time)
    } else if SCORE_ROUNDS.is_match(text) {
        Some(Scoring::Rounds)
    } else if SCORE_REPS.is_match(text) {
        Some(Scoring::Reps)
    } else {
        None
    }
}

fn cap_seconds(text: &str) -> Option<u32> {
    let caps = TIME_CAP.captures(text)?;
    if let Some(value) = caps.name("value") {
        let value: u32 = value.as_str().parse().ok()?;
        let seconds = caps
            .name("unit")
            .is_some_and(|u| u.as_str().starts_with('s'));
        return if seconds { Some(value) } else { value.checked_mul(60) };
    }
    let minutes: u32 = caps.name("value2")?.as_str().parse().ok()?;
    minutes.checked_mul(60)
}

fn scaling(lines: &[NormalizedLine]) -> Option<Scaling> {
    let mut scaling = Scaling::default();

    for line in lines {
        for caps in SCALING_LOAD.captures_iter(&line.display) {
            let (Some(side), Some(value)) = (caps.name("side"), caps.name("value")) else {
                continue;
            };
            let value = value.as_str().trim().trim_end_matches([',', ';', '/']).trim();
            if value.is_empty() {
                continue;
            }
            let target = if side.as_str().to_lowercase().starts_with('m') {
                &mut scaling.male
            } else {
                &mut scaling.female
            };
            let entry = target.get_or_insert_with(ScalingSide::default);
            match BOX_HINT.captures(value) {
                Some(hint) if value.to_lowercase().contains("box") => {
                    entry.box_height = hint.name("value").map(|v| v.as_str().to_string());
                }
                _ => {
                    if entry.load.is_none() {
                        entry.load = Some(value.to_string());
                    }
                }
            }
        }
    }

    (scaling != Scaling::default()).then_some(scaling)
}
