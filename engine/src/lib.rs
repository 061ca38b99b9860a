//! Proposal status resolution engine.
//!
//! Reconciles three independently-updating, eventually-consistent sources
//! (the indexer's status enum, the vote-tally feed, and the block-number
//! timeline) into one deterministic lifecycle stage per proposal, plus the
//! set of actions currently permitted to a viewer.
//!
//! Trust model: terminal states (`Queued`, `Executed`, `Canceled`) trust the
//! indexer unconditionally, because it only reports them after an
//! irreversible on-chain event. Non-terminal states trust local time/vote
//! computation, which may upgrade a stale `DEFEATED` from the indexer but
//! never the reverse.
//!
//! Every function here is pure and synchronous: no I/O, no hidden state,
//! safe to call arbitrarily often.

pub mod actions;
pub mod block_time;
pub mod resolver;
pub mod schedule;
pub mod tally;

pub use actions::{permitted_actions, Action};
pub use block_time::{estimate_block, estimate_timestamp, BlockTimeEstimate};
pub use resolver::{resolve, LifecycleStage, ResolvedStatus, VotingWindow, WindowSource};
pub use schedule::{GovernanceSchedule, MajorityPolicy};
pub use tally::resolve_tally;
