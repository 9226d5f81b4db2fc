//! Derived views over a finished [`WorkoutAst`](crate::models::WorkoutAst).
//!
//! Each projection is a pure function of the AST and can be recomputed at any time.

pub mod rows;
pub mod steps;
pub mod summary;
pub mod timeline;

pub use rows::{RowKind, WorkoutRow, expand_rows};
pub use steps::{StepKind, WorkoutStep, flatten_steps};
pub use summary::{ExerciseSummary, FieldConfidence, ProvenanceSummary, WorkoutSummary, summarize};
pub use timeline::{IntervalStep, IntervalTimeline, Phase, TimelineTotals, build_interval_timeline};
