//! Chain timeline reference for block-time estimation.

use crate::block::BlockNumber;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// A reference (block, timestamp) pair plus the network's average block
/// interval, refreshed periodically from the chain RPC.
///
/// Staleness reduces estimation accuracy but is never fatal; the oracle
/// extrapolates from whatever reference it is given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTimeReference {
    /// The block the reference timestamp was observed at.
    pub reference_block: BlockNumber,
    /// Wall-clock time of the reference block.
    pub reference_timestamp: Timestamp,
    /// Average seconds between blocks (network constant, e.g. 2 or 12).
    pub block_interval_secs: u64,
}

impl BlockTimeReference {
    pub fn new(
        reference_block: BlockNumber,
        reference_timestamp: Timestamp,
        block_interval_secs: u64,
    ) -> Self {
        Self {
            reference_block,
            reference_timestamp,
            block_interval_secs,
        }
    }

    /// Seconds since the reference was taken.
    pub fn age_secs(&self, now: Timestamp) -> u64 {
        self.reference_timestamp.elapsed_since(now)
    }
}
