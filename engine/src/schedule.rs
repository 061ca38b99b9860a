//! Governance schedule: voting delay/period configuration and the
//! majority policy.
//!
//! The on-chain governance configuration supplies `votingDelay` and
//! `votingPeriod` in blocks; when that read is unavailable the hard-coded
//! defaults below apply. The majority policy is a value, not a constant, so
//! an authoritative on-chain quorum or tie rule can supersede the built-in
//! heuristic without code changes.

use govlens_types::VoteWeight;
use serde::{Deserialize, Serialize};

/// How a finished vote is judged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MajorityPolicy {
    /// Strict majority of decisive (for + against) votes. A tie is not a
    /// majority; zero participation fails.
    SimpleMajority,
    /// For-votes must reach `threshold_bps` basis points of the decisive
    /// weight. Zero participation fails.
    Threshold { threshold_bps: u32 },
}

impl MajorityPolicy {
    /// Whether a finished vote passes under this policy.
    ///
    /// Abstain weight never participates in the comparison.
    pub fn passes(&self, for_weight: VoteWeight, against_weight: VoteWeight) -> bool {
        let decisive = for_weight.saturating_add(against_weight);
        if decisive.is_zero() {
            return false;
        }
        match self {
            Self::SimpleMajority => for_weight > against_weight,
            Self::Threshold { threshold_bps } => {
                // for / decisive >= threshold_bps / 10_000, in integer form.
                for_weight.micro().saturating_mul(10_000)
                    >= decisive.micro().saturating_mul(*threshold_bps as u128)
            }
        }
    }
}

/// Voting window configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceSchedule {
    /// Blocks between proposal creation and voting start.
    pub voting_delay_blocks: u64,
    /// Blocks the voting window stays open.
    pub voting_period_blocks: u64,
    /// Fallback average block interval in seconds, used when no live
    /// block-time reference exists.
    pub block_interval_secs: u64,
    pub policy: MajorityPolicy,
}

impl GovernanceSchedule {
    /// One day of blocks at the default 12s interval.
    pub const DEFAULT_VOTING_DELAY_BLOCKS: u64 = 7_200;
    /// One week of blocks at the default 12s interval.
    pub const DEFAULT_VOTING_PERIOD_BLOCKS: u64 = 50_400;
    pub const DEFAULT_BLOCK_INTERVAL_SECS: u64 = 12;

    /// Defaults merged with the delay/period read from governance config.
    pub fn with_periods(voting_delay_blocks: u64, voting_period_blocks: u64) -> Self {
        Self {
            voting_delay_blocks,
            voting_period_blocks,
            ..Self::default()
        }
    }

    /// Voting delay in seconds at the given block interval.
    pub fn delay_secs(&self, block_interval_secs: u64) -> u64 {
        self.voting_delay_blocks.saturating_mul(block_interval_secs)
    }

    /// Voting period in seconds at the given block interval.
    pub fn period_secs(&self, block_interval_secs: u64) -> u64 {
        self.voting_period_blocks.saturating_mul(block_interval_secs)
    }
}

impl Default for GovernanceSchedule {
    fn default() -> Self {
        Self {
            voting_delay_blocks: Self::DEFAULT_VOTING_DELAY_BLOCKS,
            voting_period_blocks: Self::DEFAULT_VOTING_PERIOD_BLOCKS,
            block_interval_secs: Self::DEFAULT_BLOCK_INTERVAL_SECS,
            policy: MajorityPolicy::SimpleMajority,
        }
    }
}
