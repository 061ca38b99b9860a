//! Shared error type for data-model invariant violations.

use thiserror::Error;

/// Raised when externally supplied data violates a basic type invariant.
///
/// These indicate an upstream data-integrity problem and fail fast; ordinary
/// staleness or absence of data is handled by fallbacks, never by errors.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("negative vote weight from feed: {value}")]
    NegativeWeight { value: i128 },

    #[error("negative block number from feed: {value}")]
    NegativeBlockNumber { value: i64 },

    #[error("negative voter count from feed: {value}")]
    NegativeVoterCount { value: i64 },

    #[error("negative timestamp from feed: {value}")]
    NegativeTimestamp { value: i64 },
}
