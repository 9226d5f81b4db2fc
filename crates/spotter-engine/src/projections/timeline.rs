use serde::{Deserialize, Serialize};

use crate::models::WorkoutAst;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Work,
    Rest,
}

/// A discrete timer step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalStep {
    /// Block title, or `Block N`.
    pub block: String,
    pub block_index: usize,
    pub round: u32,
    /// Position of the movement in its block's sequence.
    pub sequence_index: usize,
    pub phase: Phase,
    pub exercise_name: Option<String>,
    pub seconds: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineTotals {
    pub work_seconds: u64,
    pub rest_seconds: u64,
    pub total_seconds: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalTimeline {
    pub steps: Vec<IntervalStep>,
    pub totals: TimelineTotals,
}

impl IntervalTimeline {
    fn push(&mut self, step: IntervalStep) {
        let seconds = u64::from(step.seconds);
        match step.phase {
            Phase::Work => self.totals.work_seconds += seconds,
            Phase::Rest => self.totals.rest_seconds += seconds,
        }
        self.totals.total_seconds += seconds;
        self.steps.push(step);
    }
}

/// Work and rest phases for every block, round and movement. Zero-length phases are left out.
pub fn build_interval_timeline(ast: &WorkoutAst) -> IntervalTimeline {
    let mut timeline = IntervalTimeline::default();

    for (block_index, block) in ast.blocks.iter().enumerate() {
        let name = block.display_name(block_index);
        let rest = block.interval.map_or(0, |i| i.rest_seconds);
        for round in 1..=block.effective_rounds() {
            for (sequence_index, movement) in block.sequence.iter().enumerate() {
                let work = block
                    .interval
                    .map(|i| i.work_seconds)
                    .or_else(|| movement.quantity.and_then(|q| q.as_seconds()))
                    .unwrap_or(0);

                let phases = [(Phase::Work, work), (Phase::Rest, rest)];
                for (phase, seconds) in phases.into_iter().filter(|(_, s)| *s > 0) {
                    timeline.push(IntervalStep {
                        block: name.clone(),
                        block_index,
                        round,
                        sequence_index,
                        phase,
                        exercise_name: (phase == Phase::Work)
                            .then(|| movement.canonical_name.clone()),
                        seconds,
                    });
                }
            }
        }
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn interval_block_alternates_work_and_rest() {
        let ast = parse("40 seconds work / 20 seconds rest\nBurpees\nMountain Climbers\nComplete 3 sets").ast;
        let timeline = build_interval_timeline(&ast);

        assert_eq!(timeline.steps.len(), 12);
        assert_eq!(timeline.steps[0].phase, Phase::Work);
        assert_eq!(timeline.steps[0].exercise_name.as_deref(), Some("Burpee"));
        assert_eq!(timeline.steps[1].phase, Phase::Rest);
        assert_eq!(timeline.steps[1].exercise_name, None);
        assert_eq!(
            timeline.totals,
            TimelineTotals {
                work_seconds: 240,
                rest_seconds: 120,
                total_seconds: 360,
            }
        );
    }

    #[test]
    fn timed_movements_without_interval_use_their_duration() {
        let ast = parse("2 rounds\n1 min Plank\n30 sec Wall Sit\n10 Push-ups").ast;
        let timeline = build_interval_timeline(&ast);

        let seconds: Vec<_> = timeline.steps.iter().map(|s| s.seconds).collect();
        assert_eq!(seconds, vec![60, 30, 60, 30]);
        assert!(timeline.steps.iter().all(|s| s.phase == Phase::Work));
        assert_eq!(timeline.totals.total_seconds, 180);
    }

    #[test]
    fn timeline_is_idempotent() {
        let ast = parse("Tabata\nAir Squats").ast;
        let first = build_interval_timeline(&ast);
        assert_eq!(first, build_interval_timeline(&ast));
        assert_eq!(first.steps.len(), 16);
        assert_eq!(first.totals.total_seconds, 240);
    }

    #[test]
    fn steps_carry_block_labels() {
        let ast = parse("2 rounds\n30 sec Burpees\nPart B: For time\n1 min Plank").ast;
        let timeline = build_interval_timeline(&ast);

        assert_eq!(timeline.steps.len(), 3);
        assert_eq!(timeline.steps[0].block, "Block 1");
        assert_eq!(timeline.steps[0].block_index, 0);
        let last = timeline.steps.last().unwrap();
        assert_eq!(last.block, "Part B: For time");
        assert_eq!(last.block_index, 1);
    }

    #[test]
    fn long_durations_do_not_overflow_totals() {
        let ast = parse("2 rounds\n80000000 min Plank").ast;
        let timeline = build_interval_timeline(&ast);

        let seconds = u64::from(u32::MAX);
        assert_eq!(timeline.steps.len(), 2);
        assert_eq!(timeline.totals.work_seconds, 2 * seconds);
        assert_eq!(timeline.totals.total_seconds, 2 * seconds);
    }
}
