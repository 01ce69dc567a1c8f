//! twinborn-engine - build candidate generation.
//!
//! Enumerates every three-part grouping the inventory can supply and scores
//! each one under every chip tier.

pub mod candidates;
pub mod grouping;

pub use candidates::{generate_candidates, resonance_cmp};
pub use grouping::{enumerate_groupings, GROUP_SIZE};
