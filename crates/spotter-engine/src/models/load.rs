use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lb,
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Kg => f.write_str("kg"),
            WeightUnit::Lb => f.write_str("lb"),
        }
    }
}

/// The object being lifted or worn.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Implement {
    #[serde(rename = "DB")]
    Dumbbell,
    #[serde(rename = "KB")]
    Kettlebell,
    #[serde(rename = "BB")]
    Barbell,
    #[serde(rename = "SB")]
    Sandbag,
    #[serde(rename = "MB")]
    MedicineBall,
    /// Bodyweight, including a worn vest.
    #[serde(rename = "BW")]
    Bodyweight,
    Other(String),
}

impl Implement {
    /// Caption shorthand, e.g. `DB` for dumbbells.
    pub fn abbreviation(&self) -> &str {
        match self {
            Implement::Dumbbell => "DB",
            Implement::Kettlebell => "KB",
            Implement::Barbell => "BB",
            Implement::Sandbag => "SB",
            Implement::MedicineBall => "MB",
            Implement::Bodyweight => "BW",
            Implement::Other(name) => name,
        }
    }

    /// Canonical equipment name, as used for equipment tags.
    pub fn equipment_name(&self) -> &str {
        match self {
            Implement::Dumbbell => "Dumbbell",
            Implement::Kettlebell => "Kettlebell",
            Implement::Barbell => "Barbell",
            Implement::Sandbag => "Sandbag",
            Implement::MedicineBall => "Medicine Ball",
            Implement::Bodyweight => "Bodyweight",
            Implement::Other(name) => name,
        }
    }
}

/// Resistance attached to a movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Load {
    /// `2x 50lb DB`, `48kg KB`, `20/14lb`.
    Weight {
        amount: f64,
        /// Second figure of a `20/14lb` pair, usually the scaled or female load.
        scaled_amount: Option<f64>,
        unit: WeightUnit,
        /// How many implements are held, from `2x 50lb`.
        paired_count: Option<u32>,
        implement: Option<Implement>,
    },
    /// An implement named without a weight, e.g. a weighted vest.
    Implement {
        implement: Implement,
        freeform: Option<String>,
    },
    /// Load text that is present but not a weight, kept verbatim (`24 inch box`).
    Freeform { text: String },
}

impl Load {
    pub fn implement(&self) -> Option<&Implement> {
        match self {
            Load::Weight { implement, .. } => implement.as_ref(),
            Load::Implement { implement, .. } => Some(implement),
            Load::Freeform { .. } => None,
        }
    }
}

fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{amount}")
    }
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Load::Weight {
                amount,
                scaled_amount,
                unit,
                paired_count,
                implement,
            } => {
                if let Some(count) = paired_count {
                    write!(f, "{count}x ")?;
                }
                write!(f, "{}", format_amount(*amount))?;
                if let Some(scaled) = scaled_amount {
                    write!(f, "/{}", format_amount(*scaled))?;
                }
                write!(f, "{unit}")?;
                if let Some(implement) = implement {
                    write!(f, " {}", implement.abbreviation())?;
                }
                Ok(())
            }
            Load::Implement { implement, .. } => f.write_str(implement.abbreviation()),
            Load::Freeform { text } => f.write_str(text),
        }
    }
}
