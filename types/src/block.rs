//! Block number type for the chain timeline.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A block height on the underlying chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockNumber(u64);

impl BlockNumber {
    /// The genesis block.
    pub const GENESIS: Self = Self(0);

    pub fn new(height: u64) -> Self {
        Self(height)
    }

    /// Validate a signed block number as reported by an external feed.
    ///
    /// A negative height indicates an upstream data-integrity problem and is
    /// rejected rather than coerced.
    pub fn try_from_signed(height: i64) -> Result<Self, ModelError> {
        if height < 0 {
            return Err(ModelError::NegativeBlockNumber { value: height });
        }
        Ok(Self(height as u64))
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Blocks elapsed from `earlier` to `self`, clamped at zero.
    pub fn blocks_since(&self, earlier: BlockNumber) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    pub fn saturating_add(&self, blocks: u64) -> Self {
        Self(self.0.saturating_add(blocks))
    }
}

impl fmt::Display for BlockNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
