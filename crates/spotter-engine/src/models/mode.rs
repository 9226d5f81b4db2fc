use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminant of [`Mode`], used for tags and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeKind {
    #[serde(rename = "AMRAP")]
    Amrap,
    #[serde(rename = "EMOM")]
    Emom,
    #[serde(rename = "E#MOM")]
    EveryNMinutes,
    ForTime,
    FixedRounds,
    Complex,
    Ladder,
    Superset,
    Circuit,
    Intervals,
}

impl ModeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ModeKind::Amrap => "AMRAP",
            ModeKind::Emom => "EMOM",
            ModeKind::EveryNMinutes => "E#MOM",
            ModeKind::ForTime => "ForTime",
            ModeKind::FixedRounds => "FixedRounds",
            ModeKind::Complex => "Complex",
            ModeKind::Ladder => "Ladder",
            ModeKind::Superset => "Superset",
            ModeKind::Circuit => "Circuit",
            ModeKind::Intervals => "Intervals",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural format of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
pub enum Mode {
    #[serde(rename = "AMRAP")]
    Amrap { window_seconds: Option<u32> },
    /// One round every minute.
    #[serde(rename = "EMOM")]
    Emom { rounds: Option<u32> },
    /// One round every `window_seconds`, e.g. `E4MOM x 5`.
    #[serde(rename = "E#MOM")]
    EveryNMinutes {
        window_seconds: u32,
        rounds: Option<u32>,
    },
    ForTime,
    FixedRounds { rounds: u32 },
    Complex,
    Ladder,
    Superset,
    Circuit,
    Intervals,
}

impl Mode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Amrap { .. } => ModeKind::Amrap,
            Mode::Emom { .. } => ModeKind::Emom,
            Mode::EveryNMinutes { .. } => ModeKind::EveryNMinutes,
            Mode::ForTime => ModeKind::ForTime,
            Mode::FixedRounds { .. } => ModeKind::FixedRounds,
            Mode::Complex => ModeKind::Complex,
            Mode::Ladder => ModeKind::Ladder,
            Mode::Superset => ModeKind::Superset,
            Mode::Circuit => ModeKind::Circuit,
            Mode::Intervals => ModeKind::Intervals,
        }
    }

    /// Length of the time window: the whole AMRAP, or a single EMOM round.
    pub fn window_seconds(&self) -> Option<u32> {
        match self {
            Mode::Amrap { window_seconds } => *window_seconds,
            Mode::Emom { .. } => Some(60),
            Mode::EveryNMinutes { window_seconds, .. } => Some(*window_seconds),
            _ => None,
        }
    }

    pub fn rounds(&self) -> Option<u32> {
        match self {
            Mode::Emom { rounds } | Mode::EveryNMinutes { rounds, .. } => *rounds,
            Mode::FixedRounds { rounds } => Some(*rounds),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Amrap {
                window_seconds: Some(window),
            } => write!(f, "AMRAP {} min", window / 60),
            Mode::Emom { rounds: Some(n) } => write!(f, "EMOM x {n}"),
            Mode::EveryNMinutes {
                window_seconds,
                rounds,
            } => {
                write!(f, "E{}MOM", window_seconds / 60)?;
                if let Some(n) = rounds {
                    write!(f, " x {n}")?;
                }
                Ok(())
            }
            Mode::FixedRounds { rounds } => write!(f, "{rounds} rounds"),
            Mode::ForTime => f.write_str("For Time"),
            other => f.write_str(other.kind().as_str()),
        }
    }
}
