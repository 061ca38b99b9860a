//! Error type for the feed layer.

use govlens_types::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// A fetch did not complete within the configured timeout.
    #[error("fetch timed out")]
    Timeout,

    /// The underlying transport reported a failure.
    #[error("source error: {0}")]
    Source(String),

    /// A fetched record violated a basic type invariant.
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("configuration error: {0}")]
    Config(String),
}
