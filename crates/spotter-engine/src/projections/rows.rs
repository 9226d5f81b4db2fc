use serde::{Deserialize, Serialize};

use crate::models::{Block, Movement, Quantity, WorkoutAst};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowKind {
    Movement,
    /// A per-round insert that applies to this round.
    Insert,
}

/// One movement occurrence in one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRow {
    pub kind: RowKind,
    pub block_index: usize,
    /// Block title, or `Block N`.
    pub block: String,
    /// 1-based.
    pub round: u32,
    pub movement: String,
    pub raw_text: String,
    pub quantity: Option<Quantity>,
    pub quantity_text: String,
    pub load_text: Option<String>,
    pub notes: Option<String>,
    pub sets: Option<u32>,
}

/// Expands every block round by round: the sequence first, then the inserts due that round.
pub fn expand_rows(ast: &WorkoutAst) -> Vec<WorkoutRow> {
    let mut rows = vec![];
    for (block_index, block) in ast.blocks.iter().enumerate() {
        let name = block.display_name(block_index);
        for round in 1..=block.expansion_rounds() {
            let sequence = block.sequence.iter().map(|m| (RowKind::Movement, m));
            let inserts = block
                .per_round_inserts
                .iter()
                .filter(|insert| insert.applies_to(round))
                .map(|insert| (RowKind::Insert, &insert.movement));

            for (kind, movement) in sequence.chain(inserts) {
                rows.push(WorkoutRow {
                    kind,
                    block_index,
                    block: name.clone(),
                    round,
                    movement: movement.canonical_name.clone(),
                    raw_text: movement.raw_text.clone(),
                    quantity: movement.quantity,
                    quantity_text: quantity_text(block, movement, round),
                    load_text: movement.load.as_ref().map(ToString::to_string),
                    notes: movement.notes.clone(),
                    sets: movement.sets,
                });
            }
        }
    }
    rows
}

fn quantity_text(block: &Block, movement: &Movement, round: u32) -> String {
    if let Some(quantity) = movement.quantity {
        return match movement.sets {
            Some(sets) => format!("{sets} x {quantity}"),
            None => quantity.to_string(),
        };
    }
    if let Some(reps) = block.ladder_reps(round) {
        return format!("{reps} reps");
    }
    match block.interval {
        Some(interval) => format!("{} sec", interval.work_seconds),
        None => String::new(),
    }
}
