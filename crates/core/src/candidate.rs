use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ChipTier, Part};

/// Three parts plus a chip tier, with the resulting total resonance.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub parts: [Part; 3],
    pub chip_cost: u32,
    pub multiplier: f64,
    pub total_resonance: f64,
}

impl Candidate {
    pub fn new(parts: [Part; 3], tier: ChipTier) -> Self {
        let base = parts.iter().map(|p| p.base_resonance()).sum::<u32>();
        Self {
            parts,
            chip_cost: tier.cost,
            multiplier: tier.multiplier,
            total_resonance: f64::from(base) * tier.multiplier,
        }
    }

    pub fn base_resonance(&self) -> u32 {
        self.parts.iter().map(|p| p.base_resonance()).sum()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.parts;
        write!(
            f,
            "Parts: {a}, {b}, {c} | Multiplier: {}× | Chip Cost: {} | Total Resonance: {}",
            self.multiplier, self.chip_cost, self.total_resonance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_base_times_multiplier() {
        let c = Candidate::new([Part::E, Part::E, Part::E], ChipTier::new(0, 1.0));
        assert_eq!(c.base_resonance(), 3000);
        assert_eq!(c.total_resonance, 3000.0);

        let c = Candidate::new([Part::R4, Part::R, Part::Y], ChipTier::new(9, 2.0));
        assert_eq!(c.base_resonance(), 1200);
        assert_eq!(c.total_resonance, 2400.0);
    }

    #[test]
    fn test_display() {
        let c = Candidate::new([Part::E, Part::R4, Part::Y], ChipTier::new(0, 1.0));
        assert_eq!(
            c.to_string(),
            "Parts: E, R4, Y | Multiplier: 1× | Chip Cost: 0 | Total Resonance: 1900"
        );
    }

    #[test]
    fn test_serde_camel_case() {
        let c = Candidate::new([Part::E, Part::E, Part::Y], ChipTier::new(2, 1.4));
        let json = serde_json::to_value(c).unwrap();
        assert_eq!(json["chipCost"], 2);
        assert_eq!(json["parts"], serde_json::json!(["E", "E", "Y"]));
        assert!(json.get("totalResonance").is_some());
    }
}
