//! Fixture tests for the parsing module.
//!
//! Captions live in `fixtures/`. Each one is parsed, checked against the
//! parser invariants and compared through the normalized `Snap`.

use pretty_assertions::assert_eq;

use crate::models::{Mode, Scoring};
use crate::parsing::assembler::MAX_ROUNDS;
use crate::parsing::snapshot::{self, Snap};
use crate::projections::{build_interval_timeline, flatten_steps};
use crate::parsing::{ParsedWorkout, parse};

fn parse_fixture(name: &str) -> (ParsedWorkout, Snap) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let caption = std::fs::read_to_string(format!("{fixtures_dir}/{name}.txt")).unwrap();

    let parsed = parse(&caption);
    snapshot::invariants(&parsed.ast, &parsed.rows);
    let snap = snapshot::normalize(&parsed.ast);
    (parsed, snap)
}

#[test]
fn fixture_two_blocks() {
    let (parsed, snap) = parse_fixture("two_blocks");

    assert_eq!(snap.title.as_deref(), Some("Saturday Sweat"));
    assert_eq!(snap.blocks.len(), 2);

    let first = &snap.blocks[0];
    assert_eq!(first.name, "Block 1: EMOM 10 min");
    assert_eq!(first.mode.as_deref(), Some("EMOM x 10"));
    assert_eq!(first.rounds, 10);
    assert_eq!(
        first.movements,
        vec![
            "Burpee | 5 reps | -",
            "Kettlebell Swing | 10 reps | 24kg KB",
        ]
    );

    let second = &snap.blocks[1];
    assert_eq!(second.mode.as_deref(), Some("For Time"));
    assert_eq!(second.rounds, 3);
    assert_eq!(
        second.movements,
        vec![
            "Row | 400 m | -",
            "Wall Ball | 20 reps | 20/14lb",
            "Box Jump | 15 reps | 24 inch box",
        ]
    );
    assert_eq!(parsed.ast.blocks[1].rest_between_blocks_seconds, Some(120));

    assert_eq!(snap.scoring.as_deref(), Some("Time"));
    assert_eq!(snap.cap_seconds, Some(1500));
    assert_eq!(snap.notes, vec!["Time cap: 25 min"]);
    assert_eq!(snap.confidence, "0.95");
    assert_eq!(parsed.rows.len(), 10 * 2 + 3 * 3);
}

#[test]
fn fixture_ladder() {
    let (parsed, snap) = parse_fixture("ladder");

    assert_eq!(snap.title, None);
    let block = &snap.blocks[0];
    assert_eq!(block.mode.as_deref(), Some("Ladder"));
    assert_eq!(block.rounds, 3);
    assert_eq!(
        block.movements,
        vec!["Thruster | - | 95/65lb", "Pull-Up | - | -"]
    );

    assert_eq!(parsed.ast.scoring, Some(Scoring::Time));
    let scaling = parsed.ast.scaling.clone().unwrap();
    assert_eq!(scaling.male.unwrap().load.as_deref(), Some("95lb"));
    assert_eq!(scaling.female.unwrap().load.as_deref(), Some("65lb"));
    assert_eq!(
        snap.notes,
        vec!["Score is total time", "(M) RX: 95lb", "(F) RX: 65lb"]
    );
    assert_eq!(snap.confidence, "0.82");

    let reps: Vec<_> = parsed.rows.iter().map(|r| r.quantity_text.as_str()).collect();
    assert_eq!(
        reps,
        vec!["21 reps", "21 reps", "15 reps", "15 reps", "9 reps", "9 reps"]
    );
}

#[test]
fn fixture_enmom_list() {
    let (parsed, snap) = parse_fixture("enmom_list");

    let block = &snap.blocks[0];
    assert_eq!(block.name, "Block 1");
    assert_eq!(block.mode.as_deref(), Some("E3MOM x 6"));
    assert_eq!(block.rounds, 6);
    assert_eq!(
        block.movements,
        vec![
            "Deadlift | 12 reps | -",
            "Burpee Over Box | 8 reps | -",
            "Plank | 30 sec | -",
        ]
    );
    assert_eq!(block.rests, vec!["after 3 | 30 sec"]);
    assert_eq!(snap.notes, vec!["Who is ready for Monday?!"]);
    assert_eq!(snap.scoring, None);
    assert_eq!(
        parsed.ast.blocks[0].mode,
        Some(Mode::EveryNMinutes {
            window_seconds: 180,
            rounds: Some(6)
        })
    );
}

// Invariant tests

/// Whatever the input, there is a block and every name is non-empty.
#[test]
fn invariants_hold_for_odd_input() {
    for caption in [
        "",
        "   \n\n",
        "🔥🔥🔥",
        "#wod #crossfit @gym",
        "Block 1\nBlock 2\nBlock 3",
        "x\ny\nz",
        "Rest\nRest 60s\nRest 1:30",
        "Every 0 rounds: 10 Burpees\n3 rounds\n5 Pull-ups",
        "1-2-3-4-5-6-7-8-9-10\nBurpees",
        "AMRAP\nAMRAP 10\nEMOM\nFor Time",
    ] {
        let parsed = parse(caption);
        snapshot::invariants(&parsed.ast, &parsed.rows);
    }
}

#[test]
fn empty_caption_has_one_empty_block() {
    let parsed = parse("");
    assert_eq!(parsed.ast.blocks.len(), 1);
    assert!(parsed.ast.blocks[0].is_empty());
    assert!(parsed.rows.is_empty());
    assert_eq!(parsed.ast.confidence, 0.3);
}

#[test]
fn parsing_is_deterministic() {
    let caption = "AMRAP 15 min\n10 DB Snatches\n15 cal Bike\n20 Sit-ups";
    assert_eq!(parse(caption), parse(caption));
}

#[test]
fn long_movement_descriptions_stay_movements() {
    let parsed = parse("Burpees with a push up at the bottom of every rep");
    assert_eq!(parsed.ast.movements().count(), 1);
    assert!(parsed.ast.notes.is_empty());
}

/// Absurd numbers are clipped rather than overflowing or expanding without bound.
#[test]
fn huge_numbers_stay_bounded() {
    for caption in [
        "Time cap 99999999 min\n10 Burpees",
        "2 rounds\n70000000 min Plank",
        "4000000000 rounds\n10 Burpees",
        "EMOM 99999999 min\n5 Burpees",
        "Every 70000000 minutes x 3\n5 Burpees",
    ] {
        let parsed = parse(caption);
        snapshot::invariants(&parsed.ast, &parsed.rows);
        assert!(parsed.rows.len() <= MAX_ROUNDS as usize, "{caption:?}");
        build_interval_timeline(&parsed.ast);
        flatten_steps(&parsed.ast);
    }

    assert_eq!(parse("Time cap 99999999 min\n10 Burpees").ast.cap_seconds, None);
}

#[test]
fn stated_rounds_are_capped_with_a_note() {
    let parsed = parse("3000000 rounds\n10 Burpees\n10 Squats");
    assert_eq!(parsed.rows.len(), 2 * MAX_ROUNDS as usize);
    assert!(
        parsed
            .ast
            .notes
            .contains(&"3000000 rounds capped at 200".to_string())
    );
}
