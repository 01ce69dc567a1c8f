use twinborn_core::{Candidate, Inventory, PartUsage, TargetRange};

use crate::Assignment;

/// Serves targets one at a time, committing the best valid candidate for each
/// before moving on. Earlier targets are never revisited, so an early pick can
/// starve a later target that a different pick would have satisfied.
pub struct GoalAssigner {
    pub inventory: Inventory,
    pub chip_budget: u32,
    pub optimize_for_max: bool,
}

impl GoalAssigner {
    pub fn new(inventory: Inventory, chip_budget: u32) -> Self {
        Self {
            inventory,
            chip_budget,
            optimize_for_max: false,
        }
    }

    pub fn optimize_for_max(mut self, enabled: bool) -> Self {
        self.optimize_for_max = enabled;
        self
    }

    /// `candidates` must already be sorted by total resonance, highest first.
    pub fn assign(&self, candidates: &[Candidate], targets: &[TargetRange]) -> Assignment {
        let mut assignment = Assignment::new(targets.len());

        for (goal_index, target) in targets.iter().enumerate() {
            let chosen = self.pick(
                candidates,
                target,
                assignment.chips_used(),
                assignment.part_usage(),
            );
            match chosen {
                Some(chosen) => {
                    log::trace!("target {goal_index}: committing {chosen}");
                    assignment.commit(goal_index, chosen);
                }
                None => {
                    log::debug!(
                        "target {goal_index} [{}, {}] left unfilled",
                        target.min,
                        target.max
                    );
                }
            }
        }

        log::debug!(
            "filled {}/{} targets using {} of {} chips",
            assignment.len(),
            targets.len(),
            assignment.chips_used(),
            self.chip_budget
        );

        assignment
    }

    fn pick(
        &self,
        candidates: &[Candidate],
        target: &TargetRange,
        chips_used: u32,
        usage: &PartUsage,
    ) -> Option<Candidate> {
        let mut best: Option<&Candidate> = None;

        for candidate in candidates {
            if !target.contains(candidate.total_resonance) {
                continue;
            }
            if !self.fits(candidate, chips_used, usage) {
                continue;
            }

            match best {
                None => best = Some(candidate),
                Some(current)
                    if self.optimize_for_max
                        && candidate.total_resonance > current.total_resonance =>
                {
                    best = Some(candidate)
                }
                _ => {}
            }
        }

        best.copied()
    }

    fn fits(&self, candidate: &Candidate, chips_used: u32, usage: &PartUsage) -> bool {
        let within_budget = u64::from(chips_used) + u64::from(candidate.chip_cost)
            <= u64::from(self.chip_budget);
        within_budget && self.inventory.covers(&usage.plus(&candidate.parts))
    }
}
