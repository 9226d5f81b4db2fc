use crate::models::WorkoutAst;
use crate::projections::WorkoutRow;

/// Validates parser output invariants.
///
/// Asserts that:
/// - There is at least one block
/// - Every movement and insert has a non-empty canonical name
/// - Rest markers point inside (or just past) their block's sequence
/// - The rows match `expansion_rounds × sequence` plus the inserts due each round
/// - Confidence is within `0..=1`
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(ast: &WorkoutAst, rows: &[WorkoutRow]) {
    assert!(!ast.blocks.is_empty(), "parse produced no blocks");

    let mut expected_rows = 0;
    for (i, block) in ast.blocks.iter().enumerate() {
        for movement in block
            .sequence
            .iter()
            .chain(block.per_round_inserts.iter().map(|ins| &ins.movement))
        {
            assert!(
                !movement.canonical_name.trim().is_empty(),
                "empty canonical name in block {i}: {movement:?}"
            );
        }
        for rest in &block.rests {
            assert!(
                rest.position <= block.sequence.len(),
                "rest marker past end of block {i}: {rest:?}"
            );
        }

        let rounds = block.expansion_rounds();
        expected_rows += rounds as usize * block.sequence.len();
        expected_rows += (1..=rounds)
            .map(|r| {
                block
                    .per_round_inserts
                    .iter()
                    .filter(|ins| ins.applies_to(r))
                    .count()
            })
            .sum::<usize>();

        for row in rows.iter().filter(|r| r.block_index == i) {
            assert!(
                (1..=rounds).contains(&row.round),
                "row round {} outside 1..={rounds} in block {i}",
                row.round
            );
        }
    }
    assert_eq!(rows.len(), expected_rows, "row count does not match rounds");

    assert!(
        (0.0..=1.0).contains(&ast.confidence),
        "confidence out of range: {}",
        ast.confidence
    );
}
