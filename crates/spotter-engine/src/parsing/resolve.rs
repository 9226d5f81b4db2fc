use std::sync::LazyLock;

use regex::Regex;

use crate::models::{NameSource, Quantity};
use crate::reference::{ExerciseRecord, ReferenceIndex};

static SHORTHAND_KB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bkb\b").expect("Invalid kb shorthand regex"));

static SHORTHAND_DB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bdb\b").expect("Invalid db shorthand regex"));

struct CardioRule {
    pattern: LazyLock<Regex>,
    name: &'static str,
    equipment: Option<&'static str>,
}

/// Cardio keywords that only name the machine when paired with a
/// distance, calorie or time quantity.
static CARDIO: [CardioRule; 4] = [
    CardioRule {
        pattern: LazyLock::new(|| {
            Regex::new(r"(?i)\b(?:row|rower|rowing|erg)\b").expect("Invalid row regex")
        }),
        name: "Row",
        equipment: Some("Rower"),
    },
    CardioRule {
        pattern: LazyLock::new(|| {
            Regex::new(r"(?i)\bski(?:erg|ing)?\b").expect("Invalid ski regex")
        }),
        name: "SkiErg",
        equipment: Some("SkiErg"),
    },
    CardioRule {
        pattern: LazyLock::new(|| {
            Regex::new(r"(?i)\b(?:bike|echo|assault|airdyne)\b").expect("Invalid bike regex")
        }),
        name: "Bike",
        equipment: Some("Assault Bike"),
    },
    CardioRule {
        pattern: LazyLock::new(|| {
            Regex::new(r"(?i)\b(?:run|running|treadmill|jog)\b").expect("Invalid run regex")
        }),
        name: "Run",
        equipment: None,
    },
];

/// A settled movement name with its inferred tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub name: String,
    pub equipment: Vec<String>,
    pub body_parts: Vec<String>,
    pub source: NameSource,
}

impl Resolved {
    fn from_record(record: &ExerciseRecord, source: NameSource) -> Self {
        Self {
            name: record.name.clone(),
            equipment: record.equipment.iter().cloned().collect(),
            body_parts: record.body_parts.clone(),
            source,
        }
    }
}

/// Settles the canonical name for `raw`. Never fails: the cleaned raw text is the last resort.
pub fn resolve_movement(raw: &str, quantity: Option<Quantity>, index: &ReferenceIndex) -> Resolved {
    let raw = raw.trim();

    if let Some(record) = index.exercise(raw) {
        return Resolved::from_record(record, NameSource::Glossary);
    }

    if quantity.is_some_and(Quantity::is_machine_measure) {
        if let Some(rule) = CARDIO.iter().find(|r| r.pattern.is_match(raw)) {
            let body_parts = index
                .exercise(rule.name)
                .map(|r| r.body_parts.clone())
                .unwrap_or_default();
            return Resolved {
                name: rule.name.to_string(),
                equipment: rule.equipment.iter().map(|e| e.to_string()).collect(),
                body_parts,
                source: NameSource::CardioHeuristic,
            };
        }
    }

    let expanded = SHORTHAND_KB.replace_all(raw, "Kettlebell");
    let expanded = SHORTHAND_DB.replace_all(&expanded, "Dumbbell");
    if expanded != raw {
        if let Some(record) = index.exercise(&expanded) {
            return Resolved::from_record(record, NameSource::Glossary);
        }
        let equipment = if SHORTHAND_KB.is_match(raw) {
            "Kettlebell"
        } else {
            "Dumbbell"
        };
        return Resolved {
            name: expanded.into_owned(),
            equipment: vec![equipment.to_string()],
            body_parts: Vec::new(),
            source: NameSource::Shorthand,
        };
    }

    Resolved {
        name: raw.to_string(),
        equipment: Vec::new(),
        body_parts: Vec::new(),
        source: NameSource::Raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Row", Some(Quantity::Meters(400)), "Row", NameSource::Glossary)]
    #[case("KB Gorilla Row", Some(Quantity::Reps(10)), "Kettlebell Gorilla Row", NameSource::Glossary)]
    #[case("Wall Balls", Some(Quantity::Reps(20)), "Wall Ball", NameSource::Glossary)]
    #[case("Concept2 Row", Some(Quantity::Calories(15)), "Row", NameSource::CardioHeuristic)]
    #[case("Echo Bike sprint", Some(Quantity::Calories(20)), "Bike", NameSource::CardioHeuristic)]
    #[case("Treadmill", Some(Quantity::Minutes(5)), "Run", NameSource::CardioHeuristic)]
    #[case("Renegade Row", Some(Quantity::Reps(10)), "Renegade Row", NameSource::Raw)]
    #[case("KB Halo", Some(Quantity::Reps(8)), "Kettlebell Halo", NameSource::Shorthand)]
    #[case("DB Snatch", None, "Dumbbell Snatch", NameSource::Shorthand)]
    #[case("DUMBBELL HOPS", None, "DUMBBELL HOPS", NameSource::Raw)]
    fn resolves_names(
        #[case] raw: &str,
        #[case] quantity: Option<Quantity>,
        #[case] name: &str,
        #[case] source: NameSource,
    ) {
        let resolved = resolve_movement(raw, quantity, ReferenceIndex::shared());
        assert_eq!(resolved.name, name);
        assert_eq!(resolved.source, source);
    }

    #[test]
    fn row_carries_rower_equipment() {
        let resolved = resolve_movement("Row", Some(Quantity::Meters(400)), ReferenceIndex::shared());
        assert_eq!(resolved.equipment, vec!["Rower"]);
        assert!(resolved.body_parts.contains(&"Back".to_string()));
    }

    #[test]
    fn cardio_heuristic_needs_a_machine_quantity() {
        let resolved = resolve_movement(
            "Renegade Row",
            Some(Quantity::Reps(10)),
            ReferenceIndex::shared(),
        );
        assert!(resolved.equipment.is_empty());

        let resolved = resolve_movement(
            "Assault bike",
            Some(Quantity::Calories(12)),
            ReferenceIndex::shared(),
        );
        assert_eq!(resolved.source, NameSource::Glossary);
        assert_eq!(resolved.equipment, vec!["Bike"]);
    }
}
