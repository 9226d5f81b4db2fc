use serde::{Deserialize, Serialize};

use crate::models::{Block, Movement, Quantity, RestMarker, WorkoutAst};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Exercise,
    Rest,
    Header,
    /// A movement prescribed by duration rather than reps.
    Time,
}

/// One entry of the flat, ordered step list handed to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStep {
    /// 1-based position in the list.
    pub order: usize,
    pub kind: StepKind,
    pub raw: String,
    pub exercise: Option<String>,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub duration_seconds: Option<u32>,
    pub weight: Option<String>,
    pub distance: Option<String>,
    pub times_through: Option<u32>,
    pub workout_type_hint: Option<String>,
}

impl WorkoutStep {
    fn new(kind: StepKind, raw: impl Into<String>) -> Self {
        Self {
            order: 0,
            kind,
            raw: raw.into(),
            exercise: None,
            sets: None,
            reps: None,
            duration_seconds: None,
            weight: None,
            distance: None,
            times_through: None,
            workout_type_hint: None,
        }
    }
}

/// Flattens the AST into ordered steps: a header per titled or moded block,
/// then movements with rest steps at their recorded positions, then inserts.
pub fn flatten_steps(ast: &WorkoutAst) -> Vec<WorkoutStep> {
    let mut steps = vec![];

    for block in &ast.blocks {
        let times_through = Some(block.effective_rounds()).filter(|r| *r > 1);

        if block.title.is_some() || block.mode.is_some() {
            steps.push(header_step(block, times_through));
        }

        for (position, movement) in block.sequence.iter().enumerate() {
            steps.extend(rests_at(block, move |p| p == position));
            steps.push(movement_step(block, movement, times_through));
        }
        steps.extend(rests_at(block, move |p| p >= block.sequence.len()));

        for insert in &block.per_round_inserts {
            let mut step = movement_step(block, &insert.movement, None);
            step.raw = format!("Every {} rounds: {}", insert.every, insert.movement.raw_text);
            steps.push(step);
        }
    }

    for (i, step) in steps.iter_mut().enumerate() {
        step.order = i + 1;
    }
    steps
}

fn header_step(block: &Block, times_through: Option<u32>) -> WorkoutStep {
    let raw = match (&block.title, &block.mode) {
        (Some(title), _) => title.clone(),
        (None, Some(mode)) => mode.to_string(),
        (None, None) => String::new(),
    };
    WorkoutStep {
        times_through,
        workout_type_hint: block.mode.as_ref().map(|m| m.kind().to_string()),
        ..WorkoutStep::new(StepKind::Header, raw)
    }
}

fn rests_at<'a>(
    block: &'a Block,
    at: impl Fn(usize) -> bool + 'a,
) -> impl Iterator<Item = WorkoutStep> + 'a {
    block
        .rests
        .iter()
        .filter(move |r| at(r.position))
        .map(rest_step)
}

fn rest_step(rest: &RestMarker) -> WorkoutStep {
    WorkoutStep {
        duration_seconds: Some(rest.seconds),
        ..WorkoutStep::new(StepKind::Rest, rest.raw_text.clone())
    }
}

fn movement_step(block: &Block, movement: &Movement, times_through: Option<u32>) -> WorkoutStep {
    let quantity = movement.quantity;
    let kind = if quantity.is_some_and(Quantity::is_duration) {
        StepKind::Time
    } else {
        StepKind::Exercise
    };
    let duration_seconds = quantity
        .and_then(Quantity::as_seconds)
        .or_else(|| block.interval.map(|i| i.work_seconds));

    WorkoutStep {
        exercise: Some(movement.canonical_name.clone()),
        sets: movement.sets,
        reps: match quantity {
            Some(Quantity::Reps(n)) => Some(n),
            _ => None,
        },
        duration_seconds,
        weight: movement.load.as_ref().map(ToString::to_string),
        distance: match quantity {
            Some(q @ Quantity::Meters(_)) => Some(q.to_string()),
            _ => None,
        },
        times_through,
        ..WorkoutStep::new(kind, movement.raw_text.clone())
    }
}
