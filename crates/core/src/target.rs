use serde::{Deserialize, Serialize};

/// Inclusive resonance window a single build slot has to land in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct TargetRange {
    pub min: i64,
    pub max: i64,
}

impl TargetRange {
    /// `None` when `min > max`.
    pub fn new(min: i64, max: i64) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    #[inline]
    pub fn contains(&self, resonance: f64) -> bool {
        resonance >= self.min as f64 && resonance <= self.max as f64
    }
}
