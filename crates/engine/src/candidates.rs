use std::cmp::Ordering;

use twinborn_core::{Candidate, ChipTier, Inventory};

use crate::grouping::enumerate_groupings;

/// All candidates for `inventory`: each grouping crossed with every chip tier,
/// ordered by total resonance, highest first. Ties keep generation order.
pub fn generate_candidates(inventory: &Inventory) -> Vec<Candidate> {
    let groupings = enumerate_groupings(inventory);

    let mut candidates: Vec<Candidate> = groupings
        .iter()
        .flat_map(|&parts| {
            ChipTier::ALL
                .into_iter()
                .map(move |tier| Candidate::new(parts, tier))
        })
        .collect();

    candidates.sort_by(|a, b| resonance_cmp(a.total_resonance, b.total_resonance));

    log::debug!(
        "generated {} groupings, {} candidates",
        groupings.len(),
        candidates.len()
    );

    candidates
}

/// Descending order on resonance.
pub fn resonance_cmp(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
