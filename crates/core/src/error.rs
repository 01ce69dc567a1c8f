use thiserror::Error;

use crate::Part;

/// Boundary validation failures. The search itself never fails; these only
/// arise while turning raw form input into an [`crate::OptimizerConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizerError {
    #[error("unknown part tag `{0}`")]
    UnknownPart(String),

    #[error("part {part} has negative count {count}")]
    NegativeCount { part: Part, count: i64 },

    #[error("chip budget cannot be negative (got {0})")]
    NegativeBudget(i64),

    #[error("target {index} has min {min} greater than max {max}")]
    InvertedRange { index: usize, min: i64, max: i64 },
}
