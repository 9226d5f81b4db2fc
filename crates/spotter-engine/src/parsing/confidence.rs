use crate::models::Block;

/// Inputs to the confidence heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Signals {
    pub has_mode: bool,
    pub has_rounds: bool,
    pub movement_count: usize,
    pub glossary_hits: usize,
}

impl Signals {
    pub fn from_blocks(blocks: &[Block], glossary_hits: usize) -> Self {
        Self {
            has_mode: blocks.iter().any(|b| b.mode.is_some()),
            has_rounds: blocks.iter().any(Block::has_rounds),
            movement_count: blocks.iter().map(|b| b.sequence.len()).sum(),
            glossary_hits,
        }
    }

    fn hit_ratio(&self) -> f64 {
        if self.movement_count == 0 {
            0.0
        } else {
            self.glossary_hits as f64 / self.movement_count as f64
        }
    }
}

/// Heuristic 0..1 score: structure found, rounds found, glossary coverage and
/// a small bonus per movement.
pub fn score(signals: &Signals) -> f64 {
    let mut score = 0.3;
    if signals.has_mode {
        score += 0.2;
    }
    if signals.has_rounds {
        score += 0.1;
    }
    score += 0.3 * signals.hit_ratio();
    score += (0.01 * signals.movement_count as f64).min(0.1);
    score.min(1.0)
}
