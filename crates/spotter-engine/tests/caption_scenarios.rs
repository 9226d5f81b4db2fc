use pretty_assertions::assert_eq;
use spotter_engine::parsing::snapshot;
use spotter_engine::{
    Glossary, Mode, Phase, Platform, Provenance, Quantity, ReferenceIndex, StepKind,
    build_interval_timeline, flatten_steps, parse, parse_caption,
};

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.txt",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

#[test]
fn push_ups_rest_squats() {
    let parsed = parse("3x10 Push-ups\nRest 60s\n3x10 Squats");
    snapshot::invariants(&parsed.ast, &parsed.rows);

    let ast = &parsed.ast;
    assert_eq!(ast.blocks.len(), 1);
    let names: Vec<_> = ast.movements().map(|m| m.canonical_name.as_str()).collect();
    assert_eq!(names, vec!["Push-Up", "Squat"]);
    for movement in ast.movements() {
        assert_eq!(movement.sets, Some(3));
        assert_eq!(movement.quantity, Some(Quantity::Reps(10)));
    }
    assert_eq!(ast.scoring, None);
    assert_eq!(ast.glossary_hits, vec!["Push-Up", "Squat"]);
    assert!((ast.confidence - 0.62).abs() < 1e-9);

    let steps = flatten_steps(ast);
    let kinds: Vec<_> = steps.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![StepKind::Exercise, StepKind::Rest, StepKind::Exercise]
    );
    assert_eq!(steps[1].duration_seconds, Some(60));
}

#[test]
fn keycap_interval_circuit() {
    let parsed = parse(&fixture("keycap_intervals"));
    snapshot::invariants(&parsed.ast, &parsed.rows);

    let ast = &parsed.ast;
    assert_eq!(ast.title.as_deref(), Some("Full Body Burner"));
    let block = &ast.blocks[0];
    assert_eq!(block.sequence.len(), 6);
    assert_eq!(block.rounds, Some(4));
    assert_eq!(block.mode, Some(Mode::Intervals));
    let interval = block.interval.unwrap();
    assert_eq!((interval.work_seconds, interval.rest_seconds), (40, 20));

    assert_eq!(parsed.rows.len(), 24);
    assert!(parsed.rows.iter().all(|r| r.quantity_text == "40 sec"));

    let timeline = build_interval_timeline(ast);
    assert_eq!(timeline.steps.len(), 48);
    assert_eq!(timeline.steps[0].phase, Phase::Work);
    assert_eq!(timeline.steps[47].phase, Phase::Rest);
    assert_eq!(timeline.totals.work_seconds, 960);
    assert_eq!(timeline.totals.rest_seconds, 480);
    assert_eq!(timeline.totals.total_seconds, 1440);
}

#[test]
fn every_five_rounds_insert() {
    let parsed = parse(&fixture("every_five_rounds"));
    snapshot::invariants(&parsed.ast, &parsed.rows);

    let block = &parsed.ast.blocks[0];
    assert_eq!(block.mode, Some(Mode::ForTime));
    assert_eq!(block.effective_rounds(), 10);
    assert_eq!(parsed.rows.len(), 22);

    let insert_rounds: Vec<_> = parsed
        .rows
        .iter()
        .filter(|r| r.movement == "Run")
        .map(|r| r.round)
        .collect();
    assert_eq!(insert_rounds, vec![5, 10]);
}

#[test]
fn every_n_minutes_block() {
    let parsed = parse("Every 4 minutes x 5 rounds\n500m Row\n15 Wall Balls");
    let block = &parsed.ast.blocks[0];
    assert_eq!(
        block.mode,
        Some(Mode::EveryNMinutes {
            window_seconds: 240,
            rounds: Some(5)
        })
    );
    assert_eq!(parsed.rows.len(), 10);

    let row = &parsed.ast.blocks[0].sequence[0];
    assert_eq!(row.canonical_name, "Row");
    assert_eq!(row.equipment_tags, vec!["Rower"]);
}

#[test]
fn kettlebell_gorilla_row_is_canonicalized() {
    let parsed = parse("10 KB Gorilla Rows");
    let movement = parsed.ast.movements().next().unwrap();
    assert_eq!(movement.canonical_name, "Kettlebell Gorilla Row");
}

#[test]
fn adding_a_mode_never_lowers_confidence() {
    let body = "10 Burpees\n200m Run\n15 Mystery Moves";
    let plain = parse(body).ast.confidence;
    for header in ["AMRAP 12 min", "EMOM 10", "For time", "5 rounds", "Circuit"] {
        let with_mode = parse(&format!("{header}\n{body}")).ast.confidence;
        assert!(
            with_mode >= plain,
            "{header:?} lowered confidence: {with_mode} < {plain}"
        );
    }
}

#[test]
fn rows_render_for_review() {
    let parsed = parse("AMRAP 8 min\n5 Pull-ups\n2x 50lb DB Thrusters\n200m Run");
    let lines: Vec<String> = parsed
        .rows
        .iter()
        .map(|r| {
            let quantity = if r.quantity_text.is_empty() {
                "open"
            } else {
                r.quantity_text.as_str()
            };
            let load = r.load_text.as_deref().unwrap_or("bodyweight");
            format!("{} r{} {} {quantity} {load}", r.block, r.round, r.movement)
        })
        .collect();
    insta::assert_yaml_snapshot!(lines, @r"
    - Block 1 r1 Pull-Up 5 reps bodyweight
    - Block 1 r1 Thruster open 2x 50lb DB
    - Block 1 r1 Run 200 m bodyweight
    ");
}

#[test]
fn provenance_flows_into_summary() {
    let provenance = Provenance::from_url("https://www.instagram.com/p/C0ffee/").unwrap();
    assert_eq!(provenance.platform, Some(Platform::Instagram));

    let parsed = parse_caption("For time\n100 Burpees", Some(provenance), ReferenceIndex::shared());
    assert_eq!(parsed.summary.provenance.platform.as_deref(), Some("instagram"));
    assert_eq!(
        parsed.summary.provenance.source_url.as_deref(),
        Some("https://www.instagram.com/p/C0ffee/")
    );
    assert!(parsed.summary.tags.contains(&"for-time".to_string()));
}

#[test]
fn glossary_extension_names_new_movements() {
    let extra = Glossary::from_toml_str(
        r#"
        [[exercises]]
        name = "Sled Push"
        aliases = ["prowler push"]
        muscle_groups = ["legs"]
        equipment = "machine"
        "#,
    )
    .unwrap();
    let index = ReferenceIndex::builder().with_glossary(extra).build();

    let parsed = parse_caption("4 rounds\n25m Prowler Push\n10 Burpees", None, &index);
    let names: Vec<_> = parsed
        .ast
        .movements()
        .map(|m| m.canonical_name.as_str())
        .collect();
    assert_eq!(names, vec!["Sled Push", "Burpee"]);
    assert_eq!(parsed.ast.glossary_hits.len(), 2);
}

#[test]
fn json_contract_uses_camel_case() {
    let parsed = parse("Time cap: 12 min\nAMRAP 12 min\n10 Burpees");
    let json = serde_json::to_value(&parsed).unwrap();
    assert_eq!(json["ast"]["capSeconds"], 720);
    assert_eq!(json["ast"]["blocks"][0]["mode"]["kind"], "AMRAP");
    assert_eq!(json["ast"]["blocks"][0]["mode"]["windowSeconds"], 720);
    assert_eq!(json["rows"][0]["quantityText"], "10 reps");
    assert_eq!(json["summary"]["totalTime"], "12 min");
}
