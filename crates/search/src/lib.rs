//! Twinborn search crate - greedy assignment of builds to target ranges.

mod assignment;
mod greedy;

pub use assignment::{Assignment, Slot};
pub use greedy::GoalAssigner;

use twinborn_core::{Inventory, OptimizerConfig, TargetRange};
use twinborn_engine::generate_candidates;

/// Generate candidates for `inventory` and assign one to each target in order.
///
/// Targets nothing fits are left unfilled. The result never spends more than
/// `chip_budget` chips or more of any part than `inventory` holds.
pub fn compute_assignment(
    inventory: &Inventory,
    chip_budget: u32,
    targets: &[TargetRange],
    optimize_for_max: bool,
) -> Assignment {
    let candidates = generate_candidates(inventory);
    GoalAssigner::new(*inventory, chip_budget)
        .optimize_for_max(optimize_for_max)
        .assign(&candidates, targets)
}

/// [`compute_assignment`] driven by a prepared configuration.
pub fn optimize(config: &OptimizerConfig) -> Assignment {
    compute_assignment(
        &config.inventory,
        config.chip_budget,
        &config.targets,
        config.optimize_for_max,
    )
}
