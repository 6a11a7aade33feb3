//! Construction errors.
//!
//! A sampler either builds completely or not at all; nothing after construction can fail.

/// Why a set of weights was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidWeight {
    /// A single weight was below zero.
    #[error("weight must be >= 0 (got {weight})")]
    Negative { weight: i64 },
    /// The weights sum to zero (including the empty input).
    #[error("total weight must be > 0 (got {total})")]
    NonPositiveTotal { total: i64 },
    /// The weights do not fit in an `i64` sum.
    #[error("total weight overflows i64")]
    Overflow,
}

/// Errors returned by [`WeightedSampler::new`](crate::WeightedSampler::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid weight: {0}")]
    InvalidWeight(#[from] InvalidWeight),
}
