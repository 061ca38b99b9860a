//! Raw wire records and their validated conversion into model types.
//!
//! Records carry values exactly as fetched (signed integers, free strings).
//! Conversion fails fast on anything that violates a type invariant.
//! Negative weights, blocks, counts or timestamps indicate an upstream
//! data-integrity problem, not normal staleness.

use crate::error::FeedError;
use govlens_engine::GovernanceSchedule;
use govlens_types::{
    AccountId, BlockNumber, BlockTimeReference, Freshness, IndexerStatus, ProposalDescriptor,
    ProposalId, Timestamp, VoteTally,
};
use serde::{Deserialize, Serialize};

/// A proposal row as returned by the indexer query.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawProposalRecord {
    pub id: String,
    pub proposer: String,
    pub description: String,
    pub created_at: i64,
    pub vote_start_block: Option<i64>,
    pub vote_end_block: Option<i64>,
    pub vote_start_at: Option<i64>,
    pub vote_end_at: Option<i64>,
    pub status: IndexerStatus,
    pub queued_at: Option<i64>,
    pub executed_at: Option<i64>,
    pub canceled_at: Option<i64>,
}

impl RawProposalRecord {
    /// Validate and convert into a typed descriptor.
    pub fn into_descriptor(self) -> Result<ProposalDescriptor, FeedError> {
        Ok(ProposalDescriptor {
            id: ProposalId::new(self.id),
            proposer: AccountId::new(self.proposer),
            description_raw: self.description,
            created_at: Timestamp::try_from_signed(self.created_at)?,
            vote_start_block: convert_opt(self.vote_start_block, BlockNumber::try_from_signed)?,
            vote_end_block: convert_opt(self.vote_end_block, BlockNumber::try_from_signed)?,
            vote_start_at: convert_opt(self.vote_start_at, Timestamp::try_from_signed)?,
            vote_end_at: convert_opt(self.vote_end_at, Timestamp::try_from_signed)?,
            raw_status: self.status,
            queued_at: convert_opt(self.queued_at, Timestamp::try_from_signed)?,
            executed_at: convert_opt(self.executed_at, Timestamp::try_from_signed)?,
            canceled_at: convert_opt(self.canceled_at, Timestamp::try_from_signed)?,
        })
    }
}

/// A vote-tally row, weights in raw integer token units.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawTallyRecord {
    pub proposal_id: String,
    pub for_raw: i128,
    pub against_raw: i128,
    pub abstain_raw: i128,
    pub voter_count: i64,
}

impl RawTallyRecord {
    /// Validate and convert, scaling by the token's decimals.
    pub fn into_tally(
        self,
        token_decimals: u32,
        freshness: Freshness,
    ) -> Result<(ProposalId, VoteTally), FeedError> {
        let tally = VoteTally::from_raw(
            self.for_raw,
            self.against_raw,
            self.abstain_raw,
            self.voter_count,
            token_decimals,
            freshness,
        )?;
        Ok((ProposalId::new(self.proposal_id), tally))
    }
}

/// The chain head as returned by `getBlock('latest')`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RawBlockRecord {
    pub number: i64,
    pub timestamp: i64,
}

impl RawBlockRecord {
    /// Validate and convert into a block-time reference.
    pub fn into_reference(self, block_interval_secs: u64) -> Result<BlockTimeReference, FeedError> {
        Ok(BlockTimeReference::new(
            BlockNumber::try_from_signed(self.number)?,
            Timestamp::try_from_signed(self.timestamp)?,
            block_interval_secs,
        ))
    }
}

/// Governance configuration as read from the contract.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GovernanceConfigRecord {
    pub voting_delay_blocks: i64,
    pub voting_period_blocks: i64,
}

impl GovernanceConfigRecord {
    /// Validate and merge into a schedule, keeping engine defaults for the
    /// fields the contract does not define.
    pub fn into_schedule(self) -> Result<GovernanceSchedule, FeedError> {
        if self.voting_delay_blocks < 0 || self.voting_period_blocks < 0 {
            return Err(FeedError::Config(format!(
                "negative governance periods: delay={}, period={}",
                self.voting_delay_blocks, self.voting_period_blocks
            )));
        }
        Ok(GovernanceSchedule::with_periods(
            self.voting_delay_blocks as u64,
            self.voting_period_blocks as u64,
        ))
    }
}

fn convert_opt<T, U, E>(value: Option<T>, convert: impl Fn(T) -> Result<U, E>) -> Result<Option<U>, E> {
    value.map(convert).transpose()
}
