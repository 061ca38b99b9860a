//! Trait definitions for the four external data sources.
//!
//! Transport is the implementor's concern: an indexer GraphQL client, a
//! JSON-RPC client, or a test double all satisfy the same contract. Every
//! method is a single fetch attempt; timeouts, retries and caching live in
//! the refresh loops, not here.

use crate::error::FeedError;
use crate::records::{GovernanceConfigRecord, RawBlockRecord, RawProposalRecord, RawTallyRecord};
use govlens_types::ProposalId;

/// Proposal-list feed keyed by proposal id (indexer query).
pub trait ProposalSource {
    fn fetch_proposals(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<RawProposalRecord>, FeedError>> + Send;
}

/// Vote-tally feed, batched over proposal ids (indexer query).
pub trait TallySource {
    fn fetch_tallies(
        &self,
        ids: &[ProposalId],
    ) -> impl std::future::Future<Output = Result<Vec<RawTallyRecord>, FeedError>> + Send;
}

/// Current chain head (RPC `getBlock('latest')`).
pub trait BlockSource {
    fn fetch_latest_block(
        &self,
    ) -> impl std::future::Future<Output = Result<RawBlockRecord, FeedError>> + Send;
}

/// Governance configuration (contract read).
pub trait GovernanceConfigSource {
    fn fetch_config(
        &self,
    ) -> impl std::future::Future<Output = Result<GovernanceConfigRecord, FeedError>> + Send;
}
