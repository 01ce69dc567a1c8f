//! Twinborn core crate - fundamental types for resonance build planning.

mod candidate;
mod chip;
mod config;
mod error;
mod inventory;
mod part;
mod target;

pub use candidate::Candidate;
pub use chip::ChipTier;
pub use config::{parse_form_int, OptimizerConfig, RawForm};
pub use error::OptimizerError;
pub use inventory::{Inventory, PartUsage};
pub use part::Part;
pub use target::TargetRange;
