//! Periodic refresh collaborators for the status resolution engine.
//!
//! The engine itself performs no I/O. This crate owns everything around it:
//! trait definitions for the four external sources (indexer proposals,
//! indexer/live tallies, chain block head, on-chain governance config),
//! validated conversion of raw wire records into typed model values,
//! atomically-replaced snapshot caches, and the tokio refresh loops with
//! timeouts and bounded exponential backoff.
//!
//! Degradation rule: a failed refresh logs and leaves the previous snapshot
//! intact. Resolution always proceeds with the most recently fetched
//! values; stale-but-present beats absent, and absent has engine-side
//! fallbacks of its own.

pub mod cache;
pub mod config;
pub mod error;
pub mod hub;
pub mod records;
pub mod refresher;
pub mod shutdown;
pub mod sources;

pub use cache::SnapshotCache;
pub use config::FeedConfig;
pub use error::FeedError;
pub use hub::FeedHub;
pub use records::{
    GovernanceConfigRecord, RawBlockRecord, RawProposalRecord, RawTallyRecord,
};
pub use refresher::RefreshSettings;
pub use shutdown::ShutdownController;
pub use sources::{BlockSource, GovernanceConfigSource, ProposalSource, TallySource};
