pub mod load;
pub mod mode;
pub mod provenance;
pub mod quantity;
pub mod workout;

pub use load::{Implement, Load, WeightUnit};
pub use mode::{Mode, ModeKind};
pub use provenance::{Platform, Provenance, ProvenanceError};
pub use quantity::Quantity;
pub use workout::*;
