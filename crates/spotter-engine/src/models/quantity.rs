use std::fmt;

use serde::{Deserialize, Serialize};

/// How much of a movement to perform. Exactly one unit per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Quantity {
    Reps(u32),
    Meters(u32),
    Calories(u32),
    Seconds(u32),
    Minutes(u32),
}

impl Quantity {
    pub fn value(self) -> u32 {
        match self {
            Quantity::Reps(n)
            | Quantity::Meters(n)
            | Quantity::Calories(n)
            | Quantity::Seconds(n)
            | Quantity::Minutes(n) => n,
        }
    }

    /// Short unit label used in row and summary text.
    pub fn unit_label(self) -> &'static str {
        match self {
            Quantity::Reps(_) => "reps",
            Quantity::Meters(_) => "m",
            Quantity::Calories(_) => "cal",
            Quantity::Seconds(_) => "sec",
            Quantity::Minutes(_) => "min",
        }
    }

    pub fn is_duration(self) -> bool {
        matches!(self, Quantity::Seconds(_) | Quantity::Minutes(_))
    }

    /// Measures that only make sense on a machine or a course rather than as reps.
    pub fn is_machine_measure(self) -> bool {
        !matches!(self, Quantity::Reps(_))
    }

    /// Duration in seconds, minutes converted.
    pub fn as_seconds(self) -> Option<u32> {
        match self {
            Quantity::Seconds(n) => Some(n),
            Quantity::Minutes(n) => Some(n.saturating_mul(60)),
            _ => None,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value(), self.unit_label())
    }
}
