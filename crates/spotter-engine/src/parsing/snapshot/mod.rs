//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a parsed workout to a stable, serializable `Snap`
//!   (names, quantities and modes as display strings) for comparisons
//! - **`invariants`**: Runtime checks that hold for every caption (at least one
//!   block, non-empty names, row count matches the round structure, rest
//!   markers inside their block)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
