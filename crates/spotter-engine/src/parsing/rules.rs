//! Line rules for the block assembler.
//!
//! [`RULES`] is tried top to bottom; the first rule that returns a
//! [`Directive`] consumes the line. Lines no rule claims are movement lines.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::IntervalSpec;
use crate::reference::ReferenceIndex;

use super::caption;
use super::mode::{ModeDeclaration, detect_mode};
use super::normalize::NormalizedLine;
use super::quantity::parse_duration;

const SECONDS: &str = r"(?:seconds|second|secs|sec|s)";

static BLOCK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:block|part)\s+(?:\d+|[a-z])\b").expect("Invalid block header regex")
});

static REST_BETWEEN_BLOCKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\brest\b.*\bbetween\s+(?:blocks|parts)\b|\bbetween\s+(?:blocks|parts)\b.*\brest\b")
        .expect("Invalid rest-between-blocks regex")
});

static ROUND_INSERT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^every\s+(?P<every>\d+)\s*(?:rounds?|sets?)\s*[,:\-]?\s*(?:add\s+|do\s+|perform\s+)?(?P<body>.+)$")
        .expect("Invalid per-round insert regex")
});

static INTERVAL_KEYWORDED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?P<work>\d+)\s*{SECONDS}\b\s*(?:of\s+)?(?:work|on)\b\s*[/\-,:|&]?\s*(?:and\s+)?(?P<rest>\d+)\s*{SECONDS}\b\s*(?:of\s+)?(?:rest|off)\b"
    ))
    .expect("Invalid keyworded interval regex")
});

static INTERVAL_SLASH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?P<work>\d+)\s*{SECONDS}\b\s*/\s*(?P<rest>\d+)\s*{SECONDS}\b"
    ))
    .expect("Invalid slash interval regex")
});

static TABATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^tabata\b(?:\s+protocol\b)?\s*[:\-]?\s*(?P<body>.*)$").expect("Invalid tabata regex")
});

static COMPLETE_SETS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^complete\s+(?P<n>\d+)\s*(?:sets?|rounds?)\b|^(?P<bare>\d+)\s*sets?$")
        .expect("Invalid complete-sets regex")
});

static REP_SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:rep\s*scheme|reps|ladder|complex)\s*[:\-]?\s*(?P<seq>\d{1,3}(?:\s+\d{1,3})+)$")
        .expect("Invalid rep scheme regex")
});

static BARE_ROUNDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<n>\d+)\s*(?:rounds?|times|circuits?)\b|^(?:repeat\s*)?x\s*(?P<x>\d+)$|^repeat\s+(?P<r>\d+)\s*(?:times|x)\b")
        .expect("Invalid bare rounds regex")
});

static REST_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rest\b|\brest$").expect("Invalid rest line regex")
});

/// What a consumed line does to the assembler state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Title(String),
    OpenBlock {
        title: String,
        mode: Option<ModeDeclaration>,
    },
    Mode(ModeDeclaration),
    RestBetweenBlocks(u32),
    Insert {
        every: u32,
        body: String,
    },
    Interval(IntervalSpec),
    /// 20s on, 10s off, 8 rounds; `body` is any movement named on the same line.
    Tabata {
        body: Option<String>,
    },
    CompleteSets(u32),
    RepScheme(Vec<u32>),
    Rounds(u32),
    Note(String),
    Rest(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Title,
    BlockHeader,
    Mode,
    RestBetweenBlocks,
    PerRoundInsert,
    Interval,
    Tabata,
    CompleteSets,
    RepScheme,
    Rounds,
    Metadata,
    Rest,
    Term,
    Prose,
}

/// Facts a rule may consult besides the line itself.
pub struct LineContext<'a> {
    pub line: &'a NormalizedLine,
    /// No content line has been seen before this one.
    pub is_first: bool,
    pub index: &'a ReferenceIndex,
}

pub struct Rule {
    pub kind: RuleKind,
    pub apply: fn(&LineContext<'_>) -> Option<Directive>,
}

pub const RULES: &[Rule] = &[
    Rule {
        kind: RuleKind::Title,
        apply: title,
    },
    Rule {
        kind: RuleKind::BlockHeader,
        apply: block_header,
    },
    Rule {
        kind: RuleKind::Mode,
        apply: mode,
    },
    Rule {
        kind: RuleKind::RestBetweenBlocks,
        apply: rest_between_blocks,
    },
    Rule {
        kind: RuleKind::PerRoundInsert,
        apply: per_round_insert,
    },
    Rule {
        kind: RuleKind::Interval,
        apply: interval,
    },
    Rule {
        kind: RuleKind::Tabata,
        apply: tabata,
    },
    Rule {
        kind: RuleKind::CompleteSets,
        apply: complete_sets,
    },
    Rule {
        kind: RuleKind::RepScheme,
        apply: rep_scheme,
    },
    Rule {
        kind: RuleKind::Rounds,
        apply: bare_rounds,
    },
    Rule {
        kind: RuleKind::Metadata,
        apply: metadata,
    },
    Rule {
        kind: RuleKind::Rest,
        apply: rest,
    },
    Rule {
        kind: RuleKind::Term,
        apply: term,
    },
    Rule {
        kind: RuleKind::Prose,
        apply: prose,
    },
];

/// First rule claiming the line, if any.
pub fn classify(ctx: &LineContext<'_>) -> Option<(RuleKind, Directive)> {
    RULES
        .iter()
        .find_map(|rule| (rule.apply)(ctx).map(|d| (rule.kind, d)))
}

fn capture_u32(caps: &regex::Captures<'_>, group: &str) -> Option<u32> {
    caps.name(group)?.as_str().parse().ok()
}

fn title(ctx: &LineContext<'_>) -> Option<Directive> {
    if !ctx.is_first || BLOCK_HEADER.is_match(&ctx.line.text) {
        return None;
    }
    if detect_mode(&ctx.line.text).is_some() || caption::is_metadata_line(&ctx.line.text) {
        return None;
    }
    caption::title_from(ctx.line).map(Directive::Title)
}

fn block_header(ctx: &LineContext<'_>) -> Option<Directive> {
    let header = BLOCK_HEADER.find(&ctx.line.text)?;
    let title = ctx
        .line
        .display
        .trim()
        .trim_end_matches([':', '-'])
        .trim()
        .to_string();
    let mode = detect_mode(&ctx.line.text[header.end()..]);
    Some(Directive::OpenBlock { title, mode })
}

fn mode(ctx: &LineContext<'_>) -> Option<Directive> {
    detect_mode(&ctx.line.text).map(Directive::Mode)
}

fn rest_between_blocks(ctx: &LineContext<'_>) -> Option<Directive> {
    if !REST_BETWEEN_BLOCKS.is_match(&ctx.line.text) {
        return None;
    }
    parse_duration(&ctx.line.text).map(Directive::RestBetweenBlocks)
}

fn per_round_insert(ctx: &LineContext<'_>) -> Option<Directive> {
    let caps = ROUND_INSERT.captures(&ctx.line.display)?;
    Some(Directive::Insert {
        every: capture_u32(&caps, "every")?,
        body: caps.name("body")?.as_str().trim().to_string(),
    })
}

fn interval(ctx: &LineContext<'_>) -> Option<Directive> {
    let caps = INTERVAL_KEYWORDED
        .captures(&ctx.line.text)
        .or_else(|| INTERVAL_SLASH.captures(&ctx.line.text))?;
    Some(Directive::Interval(IntervalSpec {
        work_seconds: capture_u32(&caps, "work")?,
        rest_seconds: capture_u32(&caps, "rest")?,
    }))
}

fn tabata(ctx: &LineContext<'_>) -> Option<Directive> {
    let caps = TABATA.captures(&ctx.line.display)?;
    let body = caps
        .name("body")
        .map(|b| b.as_str().trim().to_string())
        .filter(|b| !b.is_empty());
    Some(Directive::Tabata { body })
}

fn complete_sets(ctx: &LineContext<'_>) -> Option<Directive> {
    let caps = COMPLETE_SETS.captures(&ctx.line.text)?;
    capture_u32(&caps, "n")
        .or_else(|| capture_u32(&caps, "bare"))
        .map(Directive::CompleteSets)
}

fn rep_scheme(ctx: &LineContext<'_>) -> Option<Directive> {
    let caps = REP_SCHEME.captures(&ctx.line.text)?;
    let scheme = caps
        .name("seq")?
        .as_str()
        .split_whitespace()
        .map(|n| n.parse().ok())
        .collect::<Option<Vec<u32>>>()?;
    Some(Directive::RepScheme(scheme))
}

fn bare_rounds(ctx: &LineContext<'_>) -> Option<Directive> {
    let caps = BARE_ROUNDS.captures(&ctx.line.text)?;
    capture_u32(&caps, "n")
        .or_else(|| capture_u32(&caps, "x"))
        .or_else(|| capture_u32(&caps, "r"))
        .map(Directive::Rounds)
}

fn metadata(ctx: &LineContext<'_>) -> Option<Directive> {
    caption::is_metadata_line(&ctx.line.text).then(|| Directive::Note(ctx.line.display.clone()))
}

fn rest(ctx: &LineContext<'_>) -> Option<Directive> {
    let text = ctx.line.text.trim_end_matches(['.', '!', ':']);
    if !REST_LINE.is_match(text) {
        return None;
    }
    match parse_duration(text) {
        Some(seconds) if seconds > 0 => Some(Directive::Rest(seconds)),
        _ => Some(Directive::Note(ctx.line.display.clone())),
    }
}

/// A bare format or structure word (`Superset`, `Chipper`) that names no exercise.
fn term(ctx: &LineContext<'_>) -> Option<Directive> {
    let bare = ctx.line.text.trim_end_matches(['!', '?', '.', ':']);
    if ctx.index.exercise(bare).is_some() {
        return None;
    }
    ctx.index
        .term(bare)
        .map(|_| Directive::Note(ctx.line.display.clone()))
}

fn prose(ctx: &LineContext<'_>) -> Option<Directive> {
    let text = &ctx.line.text;
    if text.contains("http") {
        return Some(Directive::Note(ctx.line.display.clone()));
    }
    if text.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let exclaims = text.ends_with('!') || text.ends_with('?');
    let wordy = text.split_whitespace().count() >= 8;
    if !(exclaims || wordy) || mentions_exercise(text, ctx.index) {
        return None;
    }
    Some(Directive::Note(ctx.line.display.clone()))
}

/// Any run of up to four words that names a known exercise.
fn mentions_exercise(text: &str, index: &ReferenceIndex) -> bool {
    let words: Vec<&str> = text
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '-'))
        .filter(|w| !w.is_empty())
        .collect();
    (1..=4).rev().any(|len| {
        words
            .windows(len)
            .any(|group| index.exercise(&group.join(" ")).is_some())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mode;
    use crate::parsing::normalize::normalize_line;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn classify_line(raw: &str, is_first: bool) -> Option<(RuleKind, Directive)> {
        let line = normalize_line(raw);
        classify(&LineContext {
            line: &line,
            is_first,
            index: ReferenceIndex::shared(),
        })
    }

    fn kind_of(raw: &str) -> Option<RuleKind> {
        classify_line(raw, false).map(|(k, _)| k)
    }

    #[rstest]
    #[case("Block 1: Strength", Some(RuleKind::BlockHeader))]
    #[case("Part B", Some(RuleKind::BlockHeader))]
    #[case("AMRAP 20 min", Some(RuleKind::Mode))]
    #[case("Every 4 minutes x 5 rounds", Some(RuleKind::Mode))]
    #[case("Rest 2 min between blocks", Some(RuleKind::RestBetweenBlocks))]
    #[case("Every 5 rounds run 400m", Some(RuleKind::PerRoundInsert))]
    #[case("40 seconds work / 20 seconds rest", Some(RuleKind::Interval))]
    #[case("40s on / 20s off", Some(RuleKind::Interval))]
    #[case("45 sec / 15 sec", Some(RuleKind::Interval))]
    #[case("Tabata", Some(RuleKind::Tabata))]
    #[case("Complete 4 sets", Some(RuleKind::CompleteSets))]
    #[case("4 sets", Some(RuleKind::CompleteSets))]
    #[case("Rep scheme: 10 8 6", Some(RuleKind::RepScheme))]
    #[case("3 times through", Some(RuleKind::Rounds))]
    #[case("Repeat x3", Some(RuleKind::Rounds))]
    #[case("Time cap: 20 min", Some(RuleKind::Metadata))]
    #[case("(F) RX: 35lb", Some(RuleKind::Metadata))]
    #[case("Rest 60s", Some(RuleKind::Rest))]
    #[case("90 sec rest", Some(RuleKind::Rest))]
    #[case("Rest as needed", Some(RuleKind::Rest))]
    #[case("Who is joining me tomorrow?", Some(RuleKind::Prose))]
    #[case("this one is going to make your legs shake for days", Some(RuleKind::Prose))]
    #[case("3x10 Push-ups", None)]
    #[case("20 Wall Balls", None)]
    #[case("Burpees!", None)]
    #[case("Burpees with a push up at the bottom of every rep", None)]
    #[case("Finish with pull ups and burpees!", None)]
    #[case("Metcon", Some(RuleKind::Term))]
    #[case("Chipper!", Some(RuleKind::Term))]
    #[case("Check the link https://example.com/wod", Some(RuleKind::Prose))]
    fn routes_lines_to_rules(#[case] raw: &str, #[case] expected: Option<RuleKind>) {
        assert_eq!(kind_of(raw), expected);
    }

    #[test]
    fn title_only_applies_to_first_line() {
        assert_eq!(
            classify_line("Saturday Sweat:", true),
            Some((RuleKind::Title, Directive::Title("Saturday Sweat".into())))
        );
        assert_ne!(
            classify_line("Saturday Sweat:", false).map(|(k, _)| k),
            Some(RuleKind::Title)
        );
        assert_eq!(
            classify_line("For Time:", true).map(|(k, _)| k),
            Some(RuleKind::Mode)
        );
    }

    #[test]
    fn block_header_carries_inline_mode() {
        let (_, directive) = classify_line("Block 2: EMOM 10 min", false).unwrap();
        let Directive::OpenBlock { title, mode } = directive else {
            panic!("expected block header, got {directive:?}");
        };
        assert_eq!(title, "Block 2: EMOM 10 min");
        assert_eq!(mode.map(|d| d.mode), Some(Mode::Emom { rounds: Some(10) }));
    }

    #[test]
    fn rest_lines_carry_seconds() {
        assert_eq!(
            classify_line("Rest 1:30", false).map(|(_, d)| d),
            Some(Directive::Rest(90))
        );
        assert_eq!(
            classify_line("Rest 2 min between blocks", false).map(|(_, d)| d),
            Some(Directive::RestBetweenBlocks(120))
        );
    }

    #[test]
    fn insert_body_keeps_case() {
        assert_eq!(
            classify_line("Every 5 rounds: add 400m Run", false).map(|(_, d)| d),
            Some(Directive::Insert {
                every: 5,
                body: "400m Run".into()
            })
        );
    }
}
