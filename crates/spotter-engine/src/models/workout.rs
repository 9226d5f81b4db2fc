use serde::{Deserialize, Serialize};

use super::{Load, Mode, Provenance, Quantity};

/// How a movement's canonical name was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NameSource {
    /// Exact alias hit in the reference index.
    Glossary,
    /// A cardio keyword paired with a distance, calorie or time quantity.
    CardioHeuristic,
    /// `kb`/`db` expanded in the raw name.
    Shorthand,
    /// Nothing matched; the cleaned raw text is the name.
    Raw,
}

/// A single exercise occurrence in a block's sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    /// Never empty: falls back to the cleaned raw text.
    pub canonical_name: String,
    /// The line as written, minus bullets, emoji and hashtags.
    pub raw_text: String,
    pub quantity: Option<Quantity>,
    /// Set count from `3x10` style prescriptions.
    pub sets: Option<u32>,
    pub load: Option<Load>,
    pub equipment_tags: Vec<String>,
    pub body_part_tags: Vec<String>,
    pub notes: Option<String>,
    pub source: NameSource,
}

/// A movement performed only on rounds divisible by `every`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundInsert {
    pub every: u32,
    pub movement: Movement,
}

impl RoundInsert {
    pub fn applies_to(&self, round: u32) -> bool {
        self.every > 0 && round % self.every == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalSpec {
    pub work_seconds: u32,
    pub rest_seconds: u32,
}

/// An inline rest line. `position` is the number of movements that precede it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestMarker {
    pub position: usize,
    pub seconds: u32,
    pub raw_text: String,
}

/// A contiguous training segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub title: Option<String>,
    pub mode: Option<Mode>,
    pub rounds: Option<u32>,
    pub ladder_scheme: Option<Vec<u32>>,
    pub rest_between_blocks_seconds: Option<u32>,
    pub per_round_inserts: Vec<RoundInsert>,
    pub interval: Option<IntervalSpec>,
    pub sequence: Vec<Movement>,
    pub rests: Vec<RestMarker>,
}

impl Block {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// `mode.rounds ?? rounds ?? 1`.
    pub fn effective_rounds(&self) -> u32 {
        self.mode
            .as_ref()
            .and_then(Mode::rounds)
            .or(self.rounds)
            .unwrap_or(1)
    }

    /// Lowers every stated round count above `max` to `max`. Returns the largest count that was cut.
    pub fn clamp_rounds(&mut self, max: u32) -> Option<u32> {
        let mut cut: Option<u32> = None;
        let mut clamp = |n: &mut u32| {
            if *n > max {
                cut = Some(cut.map_or(*n, |c| c.max(*n)));
                *n = max;
            }
        };
        if let Some(rounds) = self.rounds.as_mut() {
            clamp(rounds);
        }
        match self.mode.as_mut() {
            Some(
                Mode::Emom {
                    rounds: Some(rounds),
                }
                | Mode::EveryNMinutes {
                    rounds: Some(rounds),
                    ..
                }
                | Mode::FixedRounds { rounds },
            ) => clamp(rounds),
            _ => {}
        }
        cut
    }

    /// Rounds used for row expansion: the ladder length wins over the round count.
    pub fn expansion_rounds(&self) -> u32 {
        match &self.ladder_scheme {
            Some(scheme) if !scheme.is_empty() => scheme.len() as u32,
            _ => self.effective_rounds(),
        }
    }

    /// Rep count a ladder prescribes for a 1-based round.
    pub fn ladder_reps(&self, round: u32) -> Option<u32> {
        let scheme = self.ladder_scheme.as_ref()?;
        let idx = usize::try_from(round).ok()?.checked_sub(1)?;
        scheme.get(idx).copied()
    }

    pub fn display_name(&self, index: usize) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Block {}", index + 1))
    }

    pub fn is_empty(&self) -> bool {
        self == &Block::default()
    }

    pub fn has_rounds(&self) -> bool {
        self.rounds.is_some() || self.mode.as_ref().and_then(Mode::rounds).is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scoring {
    Time,
    Rounds,
    Reps,
}

/// Prescribed loads for one side of the scaling split.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalingSide {
    pub load: Option<String>,
    pub box_height: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scaling {
    pub male: Option<ScalingSide>,
    pub female: Option<ScalingSide>,
}

/// The complete parse result for one caption. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutAst {
    pub title: Option<String>,
    /// Never empty.
    pub blocks: Vec<Block>,
    pub scoring: Option<Scoring>,
    pub cap_seconds: Option<u32>,
    pub scaling: Option<Scaling>,
    pub notes: Vec<String>,
    pub provenance: Provenance,
    pub glossary_hits: Vec<String>,
    pub confidence: f64,
}

impl WorkoutAst {
    pub fn movements(&self) -> impl Iterator<Item = &Movement> {
        self.blocks.iter().flat_map(|b| b.sequence.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_rounds_prefers_mode_rounds() {
        let block = Block {
            mode: Some(Mode::FixedRounds { rounds: 5 }),
            rounds: Some(3),
            ..Block::default()
        };
        assert_eq!(block.effective_rounds(), 5);

        let block = Block {
            mode: Some(Mode::ForTime),
            rounds: Some(3),
            ..Block::default()
        };
        assert_eq!(block.effective_rounds(), 3);
        assert_eq!(Block::default().effective_rounds(), 1);
    }

    #[test]
    fn clamp_rounds_cuts_block_and_mode_counts() {
        let mut block = Block {
            rounds: Some(5000),
            mode: Some(Mode::EveryNMinutes {
                window_seconds: 120,
                rounds: Some(9000),
            }),
            ..Block::default()
        };
        assert_eq!(block.clamp_rounds(100), Some(9000));
        assert_eq!(block.rounds, Some(100));
        assert_eq!(block.effective_rounds(), 100);

        let mut small = Block {
            rounds: Some(3),
            ..Block::default()
        };
        assert_eq!(small.clamp_rounds(100), None);
        assert_eq!(small.rounds, Some(3));
    }

    #[test]
    fn ladder_length_governs_expansion() {
        let block = Block {
            rounds: Some(2),
            ladder_scheme: Some(vec![21, 15, 9]),
            ..Block::default()
        };
        assert_eq!(block.expansion_rounds(), 3);
        assert_eq!(block.ladder_reps(1), Some(21));
        assert_eq!(block.ladder_reps(3), Some(9));
        assert_eq!(block.ladder_reps(0), None);
        assert_eq!(block.ladder_reps(4), None);
    }

    #[test]
    fn insert_applies_on_divisible_rounds() {
        let insert = RoundInsert {
            every: 5,
            movement: Movement {
                canonical_name: "Run".into(),
                raw_text: "run 400m".into(),
                quantity: Some(Quantity::Meters(400)),
                sets: None,
                load: None,
                equipment_tags: vec![],
                body_part_tags: vec![],
                notes: None,
                source: NameSource::Glossary,
            },
        };
        let rounds: Vec<u32> = (1..=10).filter(|r| insert.applies_to(*r)).collect();
        assert_eq!(rounds, vec![5, 10]);
    }

    #[test]
    fn default_block_is_empty_until_titled() {
        assert!(Block::default().is_empty());
        assert!(!Block::titled("Block 1").is_empty());
        assert_eq!(Block::default().display_name(1), "Block 2");
    }
}
