//! Governance proposal descriptors as reported by the indexer.

use crate::account::AccountId;
use crate::block::BlockNumber;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque proposal identifier, stable for the proposal's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProposalId(String);

impl ProposalId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProposalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The indexer's last-known classification of a proposal.
///
/// Eventually consistent: the indexer cannot observe time passing, so this
/// may lag reality. `Queued`, `Executed` and `Canceled` are only ever
/// reported after the corresponding irreversible on-chain event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndexerStatus {
    Pending,
    Active,
    Queued,
    Executed,
    Canceled,
    Defeated,
}

/// A proposal as reported by the indexer.
///
/// Immutable once created; a re-fetch replaces the whole value rather than
/// mutating fields in place.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProposalDescriptor {
    pub id: ProposalId,
    pub proposer: AccountId,
    /// Free text. By convention the first colon-delimited segment is a title.
    pub description_raw: String,
    pub created_at: Timestamp,
    /// First block of the voting window, when known.
    pub vote_start_block: Option<BlockNumber>,
    /// Last block of the voting window, when known.
    pub vote_end_block: Option<BlockNumber>,
    /// Explicit voting window timestamps, when the indexer supplies them.
    pub vote_start_at: Option<Timestamp>,
    pub vote_end_at: Option<Timestamp>,
    pub raw_status: IndexerStatus,
    pub queued_at: Option<Timestamp>,
    pub executed_at: Option<Timestamp>,
    pub canceled_at: Option<Timestamp>,
}

impl ProposalDescriptor {
    /// Conventional title: the first colon-delimited segment of the raw
    /// description, trimmed. Falls back to the whole description.
    pub fn title(&self) -> &str {
        match self.description_raw.split_once(':') {
            Some((head, _)) => head.trim(),
            None => self.description_raw.trim(),
        }
    }
}
