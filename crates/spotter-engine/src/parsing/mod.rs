//! # Caption Parsing
//!
//! Turns a free-form caption into a [`WorkoutAst`].
//!
//! ## Pipeline
//!
//! 1. **`normalize`**: one [`NormalizedLine`](normalize::NormalizedLine) per input line,
//!    decorations stripped, lowercased text kept next to the display text
//! 2. **`rules`**: an ordered rule list classifies each line (header, mode, rest,
//!    insert, interval, metadata, prose); unclaimed lines are movement lines
//! 3. **`assembler`**: [`BlockAssembler`](assembler::BlockAssembler) folds the lines
//!    into blocks
//! 4. **`caption`**: caption-wide facts (scoring, time cap, scaling)
//! 5. **`confidence`**: a 0..1 estimate from structure and glossary coverage
//!
//! Parsing never fails. Unknown terms fall back to their raw text and ambiguous
//! lines are settled by rule order.

pub mod assembler;
pub mod caption;
pub mod confidence;
pub mod load;
pub mod mode;
pub mod normalize;
pub mod quantity;
pub mod resolve;
pub mod rules;
pub mod snapshot;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::models::{Provenance, WorkoutAst};
use crate::projections::{WorkoutRow, WorkoutSummary, expand_rows, summarize};
use crate::reference::ReferenceIndex;

use assembler::BlockAssembler;
use confidence::Signals;

/// A parsed caption with its row projection and compact summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedWorkout {
    pub ast: WorkoutAst,
    pub rows: Vec<WorkoutRow>,
    pub summary: WorkoutSummary,
}

/// Parses with the built-in reference index and no provenance.
pub fn parse(text: &str) -> ParsedWorkout {
    parse_caption(text, None, ReferenceIndex::shared())
}

pub fn parse_caption(
    text: &str,
    provenance: Option<Provenance>,
    index: &ReferenceIndex,
) -> ParsedWorkout {
    let ast = parse_workout(text, provenance, index);
    let rows = expand_rows(&ast);
    let summary = summarize(&ast, &rows, text);
    ParsedWorkout { ast, rows, summary }
}

/// Builds the AST only.
pub fn parse_workout(
    text: &str,
    provenance: Option<Provenance>,
    index: &ReferenceIndex,
) -> WorkoutAst {
    let lines: Vec<_> = normalize::normalize_lines(text).collect();

    let mut assembler = BlockAssembler::new(index);
    for line in &lines {
        assembler.push(line);
    }
    let assembled = assembler.finish();
    let facts = caption::scan(&lines);

    let mut hit_count = 0;
    let mut glossary_hits: Vec<String> = vec![];
    for movement in assembled.blocks.iter().flat_map(|b| &b.sequence) {
        if index.exercise(&movement.canonical_name).is_none() {
            continue;
        }
        hit_count += 1;
        if !glossary_hits.contains(&movement.canonical_name) {
            glossary_hits.push(movement.canonical_name.clone());
        }
    }

    let signals = Signals::from_blocks(&assembled.blocks, hit_count);
    let confidence = confidence::score(&signals);
    log::debug!(
        "parsed {} blocks, {} movements, {} glossary hits, confidence {confidence:.2}",
        assembled.blocks.len(),
        signals.movement_count,
        hit_count
    );

    WorkoutAst {
        title: assembled.title,
        blocks: assembled.blocks,
        scoring: facts.scoring,
        cap_seconds: facts.cap_seconds,
        scaling: facts.scaling,
        notes: assembled.notes,
        provenance: provenance.unwrap_or_default(),
        glossary_hits,
        confidence,
    }
}
