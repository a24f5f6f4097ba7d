use std::convert::TryFrom;

use thiserror::Error;

/// Error produced when a search cannot be carried out.
///
/// Failing to reach the goal is not an error: searches return
/// `Ok(None)` when the goal is unreachable within the explored
/// space or depth bound.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("{name} must be non-negative, got {value}")]
    InvalidBound { name: &'static str, value: i64 },

    #[error("{strategy} search requires a {name}")]
    MissingBound {
        strategy: &'static str,
        name: &'static str,
    },

    #[error("State {0} is not part of the state space")]
    UnknownState(String),

    #[error("Unknown search strategy: {0}")]
    UnknownStrategy(String),

    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),

    #[error("Path cost overflowed on reaching state {0}")]
    CostOverflow(String),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Convert a caller supplied depth into a usable bound.
pub(crate) fn depth_bound(name: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| SearchError::InvalidBound { name, value })
}
