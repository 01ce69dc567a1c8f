use serde::{Deserialize, Serialize};

/// A chip-cost/multiplier pair. Spending more chips unlocks a larger multiplier.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ChipTier {
    pub cost: u32,
    pub multiplier: f64,
}

impl ChipTier {
    pub const fn new(cost: u32, multiplier: f64) -> Self {
        Self { cost, multiplier }
    }

    /// Tier table in ascending cost order.
    pub const ALL: [ChipTier; 11] = [
        ChipTier::new(0, 1.0),
        ChipTier::new(1, 1.2),
        ChipTier::new(2, 1.4),
        ChipTier::new(4, 1.6),
        ChipTier::new(6, 1.8),
        ChipTier::new(9, 2.0),
        ChipTier::new(12, 2.2),
        ChipTier::new(16, 2.4),
        ChipTier::new(20, 2.6),
        ChipTier::new(25, 2.8),
        ChipTier::new(30, 3.0),
    ];

    pub fn for_cost(cost: u32) -> Option<ChipTier> {
        Self::ALL.into_iter().find(|tier| tier.cost == cost)
    }
}
