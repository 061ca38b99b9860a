//! Vote tallies associated with a proposal.

use crate::error::ModelError;
use crate::weight::VoteWeight;
use serde::{Deserialize, Serialize};

/// Where a tally came from, and therefore how much to trust it.
///
/// `Live` tallies come from an authoritative fresh fetch and win over
/// `Cached` indexer snapshots for the same proposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Freshness {
    Live,
    Cached,
}

/// Decimal-scaled vote counts for one proposal.
///
/// May be absent entirely for a proposal with no observed votes; absence is
/// the default "no votes yet" state, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub for_weight: VoteWeight,
    pub against_weight: VoteWeight,
    pub abstain_weight: VoteWeight,
    pub voter_count: u64,
    pub freshness: Freshness,
}

impl VoteTally {
    /// The "no votes yet" tally.
    pub fn zero(freshness: Freshness) -> Self {
        Self {
            for_weight: VoteWeight::ZERO,
            against_weight: VoteWeight::ZERO,
            abstain_weight: VoteWeight::ZERO,
            voter_count: 0,
            freshness,
        }
    }

    /// Build a tally from raw integer-scaled token amounts.
    ///
    /// Rejects negative weights and negative voter counts; those indicate
    /// an upstream data-integrity problem, not normal staleness.
    pub fn from_raw(
        for_raw: i128,
        against_raw: i128,
        abstain_raw: i128,
        voter_count: i64,
        token_decimals: u32,
        freshness: Freshness,
    ) -> Result<Self, ModelError> {
        if voter_count < 0 {
            return Err(ModelError::NegativeVoterCount { value: voter_count });
        }
        Ok(Self {
            for_weight: VoteWeight::try_from_signed_raw(for_raw, token_decimals)?,
            against_weight: VoteWeight::try_from_signed_raw(against_raw, token_decimals)?,
            abstain_weight: VoteWeight::try_from_signed_raw(abstain_raw, token_decimals)?,
            voter_count: voter_count as u64,
            freshness,
        })
    }

    /// Sum of decisive votes. Abstain is recorded but never decisive.
    pub fn decisive_weight(&self) -> VoteWeight {
        self.for_weight.saturating_add(self.against_weight)
    }

    /// Total weight across all three buckets.
    pub fn total_weight(&self) -> VoteWeight {
        self.decisive_weight().saturating_add(self.abstain_weight)
    }
}
