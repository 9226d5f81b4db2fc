use serde::{Deserialize, Serialize};

use crate::models::{ModeKind, Quantity, Scoring, WorkoutAst};

use super::rows::WorkoutRow;

const EXCERPT_CHARS: usize = 200;
const UNTITLED: &str = "Imported Workout";

/// One movement aggregated across all of its rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSummary {
    pub name: String,
    pub sets: u32,
    pub reps: Option<u32>,
    pub duration: Option<String>,
    pub rest: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenanceSummary {
    pub source_url: Option<String>,
    pub platform: Option<String>,
    pub caption_excerpt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfidence {
    pub overall: f64,
    pub movements: f64,
    pub structure: f64,
    pub scaling: f64,
}

/// Compact, storage-friendly view of a parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummary {
    pub title: String,
    pub exercises: Vec<ExerciseSummary>,
    pub total_time: Option<String>,
    pub equipment: Vec<String>,
    pub tags: Vec<String>,
    pub provenance: ProvenanceSummary,
    pub parse_notes: String,
    pub confidence: FieldConfidence,
}

pub fn summarize(ast: &WorkoutAst, rows: &[WorkoutRow], caption: &str) -> WorkoutSummary {
    WorkoutSummary {
        title: ast.title.clone().unwrap_or_else(|| UNTITLED.to_string()),
        exercises: exercises(ast, rows),
        total_time: ast.cap_seconds.map(|cap| format!("{} min", cap.saturating_add(30) / 60)),
        equipment: equipment(ast),
        tags: tags(ast),
        provenance: ProvenanceSummary {
            source_url: ast.provenance.source_url.clone(),
            platform: ast.provenance.platform.map(|p| p.to_string()),
            caption_excerpt: excerpt(caption),
        },
        parse_notes: format!(
            "Parsed {} blocks, {} glossary matches.",
            ast.blocks.len(),
            ast.glossary_hits.len()
        ),
        confidence: field_confidence(ast),
    }
}

fn exercises(ast: &WorkoutAst, rows: &[WorkoutRow]) -> Vec<ExerciseSummary> {
    let mut out: Vec<ExerciseSummary> = vec![];

    for row in rows {
        let sets = row.sets.unwrap_or(1);
        if let Some(existing) = out.iter_mut().find(|e| e.name == row.movement) {
            existing.sets = existing.sets.saturating_add(sets);
            continue;
        }

        let interval = ast.blocks.get(row.block_index).and_then(|b| b.interval);
        let duration = match row.quantity {
            Some(q) if q.is_duration() => Some(q.to_string()),
            _ => interval.map(|i| format!("{} sec", i.work_seconds)),
        };
        let notes = [row.load_text.as_deref(), row.notes.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        out.push(ExerciseSummary {
            name: row.movement.clone(),
            sets,
            reps: match row.quantity {
                Some(Quantity::Reps(n)) => Some(n),
                _ => None,
            },
            duration,
            rest: interval.map(|i| format!("{} sec", i.rest_seconds)),
            notes: (!notes.is_empty()).then_some(notes),
        });
    }
    out
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

fn equipment(ast: &WorkoutAst) -> Vec<String> {
    let mut out = vec![];
    for tag in ast.movements().flat_map(|m| &m.equipment_tags) {
        push_unique(&mut out, tag.to_lowercase());
    }
    out
}

fn tags(ast: &WorkoutAst) -> Vec<String> {
    let mut out = vec![];
    for block in &ast.blocks {
        if let Some(mode) = &block.mode {
            push_unique(&mut out, mode.kind().as_str().to_lowercase());
        }
        for part in block.sequence.iter().flat_map(|m| &m.body_part_tags) {
            push_unique(&mut out, part.to_lowercase());
        }
    }

    let kinds: Vec<_> = ast
        .blocks
        .iter()
        .filter_map(|b| b.mode.as_ref().map(|m| m.kind()))
        .collect();
    if ast.scoring == Some(Scoring::Time) {
        push_unique(&mut out, "for-time".into());
    }
    if kinds.contains(&ModeKind::Amrap) {
        push_unique(&mut out, "amrap".into());
    }
    if kinds
        .iter()
        .any(|k| matches!(k, ModeKind::Emom | ModeKind::EveryNMinutes))
    {
        push_unique(&mut out, "emom".into());
    }
    out
}

fn excerpt(caption: &str) -> String {
    let caption = caption.trim();
    if caption.chars().count() <= EXCERPT_CHARS {
        return caption.to_string();
    }
    let cut: String = caption.chars().take(EXCERPT_CHARS).collect();
    format!("{cut}...")
}

fn field_confidence(ast: &WorkoutAst) -> FieldConfidence {
    let movement_count = ast.blocks.iter().map(|b| b.sequence.len()).sum::<usize>();
    let hits = ast
        .movements()
        .filter(|m| ast.glossary_hits.contains(&m.canonical_name))
        .count();
    FieldConfidence {
        overall: ast.confidence,
        movements: hits as f64 / movement_count.max(1) as f64,
        structure: if ast.blocks.iter().any(|b| b.mode.is_some()) {
            1.0
        } else {
            0.5
        },
        scaling: if ast.scaling.is_some() { 1.0 } else { 0.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn groups_rows_by_movement() {
        let parsed = parse("3 rounds\n10 Burpees\n400m Run\nTime cap: 20 min");
        let summary = &parsed.summary;

        assert_eq!(summary.title, "Imported Workout");
        assert_eq!(summary.exercises.len(), 2);
        assert_eq!(summary.exercises[0].name, "Burpee");
        assert_eq!(summary.exercises[0].sets, 3);
        assert_eq!(summary.exercises[0].reps, Some(10));
        assert_eq!(summary.total_time.as_deref(), Some("20 min"));
        assert_eq!(
            summary.parse_notes,
            "Parsed 1 blocks, 2 glossary matches."
        );
    }

    #[test]
    fn interval_blocks_stamp_duration_and_rest() {
        let parsed = parse("45 sec / 15 sec\nBurpees\nComplete 4 sets");
        let burpee = &parsed.summary.exercises[0];
        assert_eq!(burpee.sets, 4);
        assert_eq!(burpee.duration.as_deref(), Some("45 sec"));
        assert_eq!(burpee.rest.as_deref(), Some("15 sec"));
    }

    #[test]
    fn tags_and_equipment_are_lowercase_and_unique() {
        let parsed = parse("AMRAP 12 min\n10 KB Swings\n10 Goblet Squats\n200m Run");
        let summary = &parsed.summary;
        assert_eq!(summary.tags.first().map(String::as_str), Some("amrap"));
        assert_eq!(
            summary.tags.iter().filter(|t| *t == "amrap").count(),
            1
        );
        assert!(summary.equipment.contains(&"kettlebell".to_string()));
        assert!(summary.tags.iter().all(|t| *t == t.to_lowercase()));
    }

    #[test]
    fn long_captions_are_excerpted() {
        let caption = format!("20 Burpees\n{}", "go hard ".repeat(40));
        let summary = parse(&caption).summary;
        assert!(summary.provenance.caption_excerpt.ends_with("..."));
        assert_eq!(summary.provenance.caption_excerpt.chars().count(), 203);
    }

    #[test]
    fn field_confidence_reflects_structure_and_scaling() {
        let plain = parse("10 Burpees").summary.confidence;
        assert_eq!(plain.structure, 0.5);
        assert_eq!(plain.scaling, 0.0);
        assert_eq!(plain.movements, 1.0);

        let scaled = parse("For time\n50 Wall Balls\n(M) 20lb (F) 14lb").summary.confidence;
        assert_eq!(scaled.structure, 1.0);
        assert_eq!(scaled.scaling, 1.0);
    }
}
