//! Structural format detection.
//!
//! [`detect_mode`] runs an ordered list of detectors over the lowercased line;
//! the first one that recognizes a declaration wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Mode;

const MINUTES: &str = r"(?:minutes|minute|mins|min)";

static EVERY_N_MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:^|\s)(?:e|every)\s*(?P<window>\d+)\s*{MINUTES}\b\s*(?:x\s*(?P<times>\d+)|for\s+(?P<for>\d+)\s*(?:rounds?|sets?))"
    ))
    .expect("Invalid every-n-minutes regex")
});

static ENMOM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\be(?P<window>\d+)mom\b(?:\s*(?:x|for)\s*(?P<rounds>\d+))?")
        .expect("Invalid ENMOM regex")
});

static ON_THE_MINUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bevery\s*(?P<window>\d+)\s*minutes?\s+on the minute\b")
        .expect("Invalid on-the-minute regex")
});

static EMOM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bemom\b|every minute on the minute").expect("Invalid EMOM regex")
});

static EMOM_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?P<before>\d+)\s*{MINUTES}\b|\bemom\s*(?:x\s*)?(?P<after>\d+)\b"
    ))
    .expect("Invalid EMOM count regex")
});

static AMRAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bamrap\b|as many (?:reps|rounds) as possible").expect("Invalid AMRAP regex")
});

static AMRAP_WINDOW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?P<minutes>\d+)\s*{MINUTES}\b|\bamrap\s*(?P<bare>\d+)\b"
    ))
    .expect("Invalid AMRAP window regex")
});

static FOR_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bfor time\b").expect("Invalid for-time regex"));

static ROUNDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<rounds>\d+)\s*rounds?\b").expect("Invalid rounds regex")
});

static MULTIPLIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d\s*x\b|\bx\s*\d").expect("Invalid multiplier regex"));

static LADDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{1,3}(?:\s*[-,]\s*\d{1,3})+\b").expect("Invalid ladder regex")
});

static LADDER_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\brep\s*scheme\b|\bcomplex\b|\bladder\b").expect("Invalid ladder keyword regex")
});

static SUPERSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bsuper\s*-?\s*sets?\b").expect("Invalid superset regex"));

static CIRCUIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bcircuit\b").expect("Invalid circuit regex"));

/// A recognized format declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeDeclaration {
    pub mode: Mode,
    /// Rep scheme of a ladder or complex line, e.g. `[21, 15, 9]`.
    pub ladder_scheme: Option<Vec<u32>>,
    /// Round count stated alongside a mode that carries none, e.g. `3 rounds for time`.
    pub rounds: Option<u32>,
}

impl ModeDeclaration {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            ladder_scheme: None,
            rounds: None,
        }
    }
}

type Detector = fn(&str) -> Option<ModeDeclaration>;

/// Detectors in precedence order.
const DETECTORS: &[(&str, Detector)] = &[
    ("every-n-minutes", every_n_minutes),
    ("emom", emom),
    ("amrap", amrap),
    ("for-time", for_time),
    ("rounds", fixed_rounds),
    ("ladder", ladder),
    ("superset", superset),
    ("circuit", circuit),
];

/// Classifies a lowercased line as a format declaration.
pub fn detect_mode(text: &str) -> Option<ModeDeclaration> {
    DETECTORS.iter().find_map(|(name, detect)| {
        let decl = detect(text)?;
        log::trace!("mode detector {name} matched {text:?}");
        Some(decl)
    })
}

fn capture_u32(caps: &regex::Captures<'_>, group: &str) -> Option<u32> {
    caps.name(group)?.as_str().parse().ok()
}

fn stated_rounds(text: &str) -> Option<u32> {
    ROUNDS
        .captures(text)
        .and_then(|c| capture_u32(&c, "rounds"))
}

/// Numbers of the first dash- or comma-separated sequence in `text`.
pub fn ladder_sequence(text: &str) -> Option<Vec<u32>> {
    let seq = LADDER.find(text)?;
    seq.as_str()
        .split(['-', ','])
        .map(|n| n.trim().parse().ok())
        .collect()
}

fn every_n_minutes(text: &str) -> Option<ModeDeclaration> {
    let (window, rounds) = if let Some(caps) = EVERY_N_MINUTES.captures(text) {
        let rounds = capture_u32(&caps, "times").or_else(|| capture_u32(&caps, "for"));
        (capture_u32(&caps, "window")?, rounds)
    } else if let Some(caps) = ENMOM.captures(text) {
        let rounds = capture_u32(&caps, "rounds").or_else(|| stated_rounds(text));
        (capture_u32(&caps, "window")?, rounds)
    } else {
        let caps = ON_THE_MINUTE.captures(text)?;
        (capture_u32(&caps, "window")?, stated_rounds(text))
    };

    let mode = if window == 1 {
        Mode::Emom { rounds }
    } else {
        Mode::EveryNMinutes {
            window_seconds: window.saturating_mul(60),
            rounds,
        }
    };
    Some(ModeDeclaration::new(mode))
}

fn emom(text: &str) -> Option<ModeDeclaration> {
    if !EMOM.is_match(text) {
        return None;
    }
    let rounds = EMOM_COUNT
        .captures(text)
        .and_then(|c| capture_u32(&c, "before").or_else(|| capture_u32(&c, "after")));
    Some(ModeDeclaration::new(Mode::Emom { rounds }))
}

fn amrap(text: &str) -> Option<ModeDeclaration> {
    if !AMRAP.is_match(text) {
        return None;
    }
    let window_seconds = AMRAP_WINDOW
        .captures(text)
        .and_then(|c| capture_u32(&c, "minutes").or_else(|| capture_u32(&c, "bare")))
        .map(|m| m.saturating_mul(60));
    Some(ModeDeclaration::new(Mode::Amrap { window_seconds }))
}

fn for_time(text: &str) -> Option<ModeDeclaration> {
    if !FOR_TIME.is_match(text) {
        return None;
    }
    Some(ModeDeclaration {
        rounds: stated_rounds(text),
        ..ModeDeclaration::new(Mode::ForTime)
    })
}

fn fixed_rounds(text: &str) -> Option<ModeDeclaration> {
    if text.contains("every") || MULTIPLIER.is_match(text) {
        return None;
    }
    let rounds = stated_rounds(text)?;
    Some(ModeDeclaration::new(Mode::FixedRounds { rounds }))
}

fn ladder(text: &str) -> Option<ModeDeclaration> {
    let scheme = ladder_sequence(text)?;
    let keyword = LADDER_KEYWORD.is_match(text);
    if scheme.len() < 3 && !(scheme.len() == 2 && keyword) {
        return None;
    }
    let mode = if text.contains("complex") {
        Mode::Complex
    } else {
        Mode::Ladder
    };
    Some(ModeDeclaration {
        ladder_scheme: Some(scheme),
        ..ModeDeclaration::new(mode)
    })
}

fn superset(text: &str) -> Option<ModeDeclaration> {
    SUPERSET
        .is_match(text)
        .then(|| ModeDeclaration::new(Mode::Superset))
}

fn circuit(text: &str) -> Option<ModeDeclaration> {
    CIRCUIT
        .is_match(text)
        .then(|| ModeDeclaration::new(Mode::Circuit))
}
