//! Fundamental types for the govlens dashboard core.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! timestamps, block numbers, decimal vote weights, and the proposal / tally /
//! caller data model fed into the status resolution engine.

pub mod account;
pub mod block;
pub mod caller;
pub mod chain;
pub mod error;
pub mod proposal;
pub mod tally;
pub mod time;
pub mod weight;

pub use account::AccountId;
pub use block::BlockNumber;
pub use caller::CallerContext;
pub use chain::BlockTimeReference;
pub use error::ModelError;
pub use proposal::{IndexerStatus, ProposalDescriptor, ProposalId};
pub use tally::{Freshness, VoteTally};
pub use time::Timestamp;
pub use weight::VoteWeight;
