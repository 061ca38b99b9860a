//! Block-time oracle: linear block ↔ wall-clock estimation.
//!
//! Actual block times vary; everything here is a deliberate approximation.
//! Callers must treat the output as an estimate, not a guarantee.

use govlens_types::{BlockNumber, BlockTimeReference, Timestamp};

/// An estimated wall-clock time for a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockTimeEstimate {
    pub timestamp: Timestamp,
    /// True when the oracle had no reference and fell back to `now`.
    /// Downstream consumers use this to suppress or caveat display.
    pub approximate: bool,
}

/// Estimate the wall-clock timestamp of `target` by linear extrapolation
/// from the reference point.
///
/// Past blocks extrapolate backward (saturating at the epoch), future blocks
/// forward; neither is an error. With no reference at all, the best effort
/// is the current wall-clock time, flagged `approximate`.
pub fn estimate_timestamp(
    target: BlockNumber,
    reference: Option<&BlockTimeReference>,
    now: Timestamp,
) -> BlockTimeEstimate {
    let Some(reference) = reference else {
        return BlockTimeEstimate {
            timestamp: now,
            approximate: true,
        };
    };

    let timestamp = if target >= reference.reference_block {
        let blocks = target.blocks_since(reference.reference_block);
        reference
            .reference_timestamp
            .saturating_add_secs(blocks.saturating_mul(reference.block_interval_secs))
    } else {
        let blocks = reference.reference_block.blocks_since(target);
        reference
            .reference_timestamp
            .saturating_sub_secs(blocks.saturating_mul(reference.block_interval_secs))
    };

    BlockTimeEstimate {
        timestamp,
        approximate: false,
    }
}

/// Inverse mapping: estimate which block height corresponds to `target`.
///
/// Saturates at genesis for timestamps before the reachable range. A zero
/// block interval degenerates to the reference block itself.
pub fn estimate_block(target: Timestamp, reference: &BlockTimeReference) -> BlockNumber {
    if reference.block_interval_secs == 0 {
        return reference.reference_block;
    }

    if target >= reference.reference_timestamp {
        let secs = reference.reference_timestamp.elapsed_since(target);
        reference
            .reference_block
            .saturating_add(secs / reference.block_interval_secs)
    } else {
        let secs = target.elapsed_since(reference.reference_timestamp);
        let blocks_back = secs / reference.block_interval_secs;
        BlockNumber::new(reference.reference_block.value().saturating_sub(blocks_back))
    }
}
