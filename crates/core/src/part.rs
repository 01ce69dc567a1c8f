//! Part catalog: tags and base resonance values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::OptimizerError;

#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize,
)]
pub enum Part {
    E,
    R4,
    R3,
    R2,
    R1,
    R,
    Y3,
    Y2,
    Y1,
    Y,
}

impl Part {
    pub const COUNT: usize = 10;

    /// Catalog order. Enumeration walks parts in this order.
    pub const ALL: [Part; Part::COUNT] = [
        Part::E,
        Part::R4,
        Part::R3,
        Part::R2,
        Part::R1,
        Part::R,
        Part::Y3,
        Part::Y2,
        Part::Y1,
        Part::Y,
    ];

    pub fn base_resonance(self) -> u32 {
        match self {
            Part::E => 1000,
            Part::R4 => 850,
            Part::R3 => 700,
            Part::R2 => 550,
            Part::R1 => 400,
            Part::R => 300,
            Part::Y3 => 200,
            Part::Y2 => 150,
            Part::Y1 => 100,
            Part::Y => 50,
        }
    }

    /// Position in the catalog, usable as a dense array index.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn tag(self) -> &'static str {
        match self {
            Part::E => "E",
            Part::R4 => "R4",
            Part::R3 => "R3",
            Part::R2 => "R2",
            Part::R1 => "R1",
            Part::R => "R",
            Part::Y3 => "Y3",
            Part::Y2 => "Y2",
            Part::Y1 => "Y1",
            Part::Y => "Y",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Part {
    type Err = OptimizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Part::ALL
            .into_iter()
            .find(|part| part.tag() == s)
            .ok_or_else(|| OptimizerError::UnknownPart(s.to_string()))
    }
}
