use std::sync::LazyLock;

use regex::Regex;

use crate::reference::unify_punctuation;

/// Keycap digits (`1️⃣`), pictographs, skin tones, joiners and variation selectors.
static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[0-9#*]\x{FE0F}?\x{20E3}|[\p{Extended_Pictographic}\p{Emoji_Modifier}\p{Regional_Indicator}\x{FE0F}\x{FE0E}\x{200D}\x{20E3}]",
    )
    .expect("Invalid emoji regex")
});

static HASHTAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|\s)(?:#[\p{L}\p{N}_]|@[\p{L}_])[\p{L}\p{N}_.\-]*").expect("Invalid hashtag regex")
});

/// Bullets and list numbering at the start of a line.
static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[\-*+>\u{2022}\u{00B7}\u{25AA}\u{25AB}\u{25E6}\u{2023}\u{2043}\u{25BA}\u{25B8}\u{2192}\u{27A1}]+\s*|\d{1,2}[.)]\s+)+")
        .expect("Invalid list marker regex")
});

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[=\-_\u{2022}*~.\u{2014}\u{2013}\s]{3,}$").expect("Invalid separator regex")
});

/// A caption line with local facts only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLine {
    /// The line exactly as written.
    pub raw: String,
    /// Decorations stripped, case preserved. Used for names and notes.
    pub display: String,
    /// `display` lowercased. Used for matching.
    pub text: String,
    pub is_blank: bool,
    /// Separator rules and emoji-only lines.
    pub is_decorative: bool,
}

impl NormalizedLine {
    pub fn is_content(&self) -> bool {
        !self.is_blank && !self.is_decorative && !self.text.is_empty()
    }
}

/// Strips emoji, hashtags, mentions and list markers; unifies punctuation; collapses whitespace.
pub fn clean_display(raw: &str) -> String {
    let unified = unify_punctuation(raw);
    let no_emoji = EMOJI.replace_all(&unified, " ");
    let no_tags = HASHTAG.replace_all(&no_emoji, "${1}");
    let collapsed = no_tags.split_whitespace().collect::<Vec<_>>().join(" ");
    LIST_MARKER.replace(&collapsed, "").trim().to_string()
}

pub fn normalize_line(raw: &str) -> NormalizedLine {
    let raw = raw.trim_end_matches(['\r', '\n']);
    let is_blank = raw.trim().is_empty();
    let display = clean_display(raw);
    let text = display.to_lowercase();
    let is_decorative = !is_blank && (SEPARATOR.is_match(raw.trim()) || text.is_empty());

    NormalizedLine {
        raw: raw.to_string(),
        display,
        text,
        is_blank,
        is_decorative,
    }
}

pub fn normalize_lines(caption: &str) -> impl Iterator<Item = NormalizedLine> + '_ {
    caption.lines().map(normalize_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("1\u{FE0F}\u{20E3} DUMBBELL HOPS", "DUMBBELL HOPS")]
    #[case("\u{2705} 40 seconds work / 20 seconds rest", "40 seconds work / 20 seconds rest")]
    #[case("\u{2022} 20 Wall Balls", "20 Wall Balls")]
    #[case("- 400m Row", "400m Row")]
    #[case("1. 10 Burpees", "10 Burpees")]
    #[case("2) 15 Air Squats \u{1F525}\u{1F525}", "15 Air Squats")]
    #[case("AMRAP 20 #legday @coach_amy", "AMRAP 20")]
    #[case("Devil\u{2019}s press \u{2013} 10", "Devil's press - 10")]
    #[case("3\u{00D7}10 Push-ups", "3x10 Push-ups")]
    #[case("Thrusters 95#", "Thrusters 95#")]
    #[case("10 KB Swings @24kg", "10 KB Swings @24kg")]
    #[case("Row 500m @ 2:00 pace @rowfast", "Row 500m @ 2:00 pace")]
    fn cleans_display_text(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(clean_display(raw), expected);
    }

    #[test]
    fn text_is_lowercased_display() {
        let line = normalize_line("  EMOM 12 Min  \r");
        assert_eq!(line.raw, "  EMOM 12 Min  ");
        assert_eq!(line.display, "EMOM 12 Min");
        assert_eq!(line.text, "emom 12 min");
        assert!(line.is_content());
    }

    #[rstest]
    #[case("---")]
    #[case("=====")]
    #[case("\u{2022}\u{2022}\u{2022}")]
    #[case("\u{1F4AA}\u{1F525}\u{1F4AF}")]
    #[case("#fitness #wod")]
    fn flags_decorative_lines(#[case] raw: &str) {
        let line = normalize_line(raw);
        assert!(line.is_decorative, "{raw:?} should be decorative");
        assert!(!line.is_content());
    }

    #[test]
    fn blank_lines_are_not_decorative() {
        let line = normalize_line("   ");
        assert!(line.is_blank);
        assert!(!line.is_decorative);
    }
}
