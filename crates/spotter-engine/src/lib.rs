pub mod models;
pub mod parsing;
pub mod projections;
pub mod reference;

// Re-export key types for easier usage
pub use models::*;
pub use parsing::{ParsedWorkout, parse, parse_caption, parse_workout};
pub use projections::*;
pub use reference::{Glossary, GlossaryError, ReferenceIndex};
