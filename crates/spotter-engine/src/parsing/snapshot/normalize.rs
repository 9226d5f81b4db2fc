use serde::Serialize;

use crate::models::{Block, Movement, WorkoutAst};

/// Snapshot of a parsed workout for testing.
///
/// Everything is rendered to display strings so comparisons stay readable.
#[derive(Debug, Serialize)]
pub struct Snap {
    pub title: Option<String>,
    pub scoring: Option<String>,
    pub cap_seconds: Option<u32>,
    pub blocks: Vec<BlockSnap>,
    pub notes: Vec<String>,
    /// Rounded to two places.
    pub confidence: String,
}

/// Snapshot of a single block.
#[derive(Debug, Serialize)]
pub struct BlockSnap {
    pub name: String,
    pub mode: Option<String>,
    pub rounds: u32,
    /// `name | quantity | load` per movement.
    pub movements: Vec<String>,
    pub inserts: Vec<String>,
    pub rests: Vec<String>,
}

fn movement_line(m: &Movement) -> String {
    let quantity = match (m.sets, m.quantity) {
        (Some(sets), Some(q)) => format!("{sets} x {q}"),
        (None, Some(q)) => q.to_string(),
        _ => "-".to_string(),
    };
    let load = m.load.as_ref().map_or_else(|| "-".to_string(), ToString::to_string);
    format!("{} | {quantity} | {load}", m.canonical_name)
}

fn block_snap(index: usize, block: &Block) -> BlockSnap {
    BlockSnap {
        name: block.display_name(index),
        mode: block.mode.as_ref().map(ToString::to_string),
        rounds: block.expansion_rounds(),
        movements: block.sequence.iter().map(movement_line).collect(),
        inserts: block
            .per_round_inserts
            .iter()
            .map(|ins| format!("every {} | {}", ins.every, movement_line(&ins.movement)))
            .collect(),
        rests: block
            .rests
            .iter()
            .map(|r| format!("after {} | {} sec", r.position, r.seconds))
            .collect(),
    }
}

pub fn normalize(ast: &WorkoutAst) -> Snap {
    Snap {
        title: ast.title.clone(),
        scoring: ast.scoring.map(|s| format!("{s:?}")),
        cap_seconds: ast.cap_seconds,
        blocks: ast
            .blocks
            .iter()
            .enumerate()
            .map(|(i, b)| block_snap(i, b))
            .collect(),
        notes: ast.notes.clone(),
        confidence: format!("{:.2}", ast.confidence),
    }
}
