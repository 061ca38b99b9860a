//! Status resolver: the proposal lifecycle state machine.
//!
//! The resolver reconciles the indexer's reported status with a locally
//! computed time/vote classification through an explicit, ordered chain of
//! named rules. The chain is data, not nested conditionals, so the
//! precedence stays auditable and each rule is testable on its own:
//!
//! 1. `terminal-override`: Queued/Executed/Canceled from the indexer map
//!    directly; these follow irreversible on-chain events and no heuristic
//!    may override them.
//! 2. `heuristic-upgrade`: a stale indexer `DEFEATED` loses to a locally
//!    observed passing majority; a passing proposal is never under-reported.
//! 3. `heuristic-default`: the time/vote classification stands.

use crate::block_time::estimate_timestamp;
use crate::schedule::GovernanceSchedule;
use govlens_types::{
    BlockTimeReference, IndexerStatus, ProposalDescriptor, Timestamp, VoteTally,
};
use serde::{Deserialize, Serialize};

/// Final lifecycle stage of a proposal.
///
/// `Pending → Active → {PendingQueue → Queued → Executed} | Defeated`, with
/// `Canceled` reachable from any non-terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleStage {
    Pending,
    Active,
    /// Vote passed; awaiting the queue transaction.
    PendingQueue,
    Queued,
    Executed,
    Canceled,
    Defeated,
}

impl LifecycleStage {
    /// Whether no further transition is possible from this stage.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Executed | Self::Canceled)
    }
}

/// The voting window in wall-clock terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingWindow {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl VotingWindow {
    pub fn contains(&self, now: Timestamp) -> bool {
        self.start <= now && now <= self.end
    }
}

/// Which fallback tier produced the voting window.
///
/// Recorded on every resolution so callers can see how trustworthy the
/// window is rather than guessing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowSource {
    /// Explicit timestamps carried by the descriptor.
    ExplicitTimestamps,
    /// Estimated from vote blocks via the block-time reference.
    BlockEstimate,
    /// Derived from `created_at` plus the governance schedule.
    ScheduleEstimate,
    /// Last resort: a symmetric ±1 day window around `now`.
    AroundNow,
}

/// The resolver's output: derived on every query, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStatus {
    pub stage: LifecycleStage,
    pub voting_window: VotingWindow,
    pub window_source: WindowSource,
    /// True when the window came from a fallback tier; display layers use
    /// this to caveat the dates they show.
    pub approximate_window: bool,
}

/// Everything a rule in the override chain may look at.
struct RuleInput {
    raw: IndexerStatus,
    heuristic: LifecycleStage,
}

type Rule = fn(&RuleInput) -> Option<LifecycleStage>;

/// The precedence order. First rule to return a stage wins.
const OVERRIDE_CHAIN: [(&str, Rule); 3] = [
    ("terminal-override", terminal_override),
    ("heuristic-upgrade", heuristic_upgrade),
    ("heuristic-default", heuristic_default),
];

fn terminal_override(input: &RuleInput) -> Option<LifecycleStage> {
    match input.raw {
        IndexerStatus::Queued => Some(LifecycleStage::Queued),
        IndexerStatus::Executed => Some(LifecycleStage::Executed),
        IndexerStatus::Canceled => Some(LifecycleStage::Canceled),
        _ => None,
    }
}

fn heuristic_upgrade(input: &RuleInput) -> Option<LifecycleStage> {
    if input.raw == IndexerStatus::Defeated && input.heuristic == LifecycleStage::PendingQueue {
        return Some(LifecycleStage::PendingQueue);
    }
    None
}

fn heuristic_default(input: &RuleInput) -> Option<LifecycleStage> {
    Some(input.heuristic)
}

/// Resolve the authoritative lifecycle stage of a proposal.
///
/// Pure and idempotent: the result is a function of exactly these inputs.
/// Missing data never raises: an absent block-time reference degrades the
/// window estimate, and the tally passed in should already have fallen back
/// to cached or zero values (see [`crate::tally::resolve_tally`]).
pub fn resolve(
    descriptor: &ProposalDescriptor,
    tally: &VoteTally,
    block_time: Option<&BlockTimeReference>,
    schedule: &GovernanceSchedule,
    now: Timestamp,
) -> ResolvedStatus {
    let (voting_window, window_source, approximate_window) =
        compute_window(descriptor, block_time, schedule, now);

    let heuristic = classify(&voting_window, tally, schedule, now);
    let input = RuleInput {
        raw: descriptor.raw_status,
        heuristic,
    };

    for (name, rule) in OVERRIDE_CHAIN {
        if let Some(stage) = rule(&input) {
            if name == "heuristic-upgrade" {
                tracing::debug!(
                    proposal = %descriptor.id,
                    "indexer reports DEFEATED but local tally shows a passing majority; upgrading"
                );
            }
            tracing::debug!(
                proposal = %descriptor.id,
                rule = name,
                stage = ?stage,
                window_source = ?window_source,
                "resolved proposal stage"
            );
            return ResolvedStatus {
                stage,
                voting_window,
                window_source,
                approximate_window,
            };
        }
    }

    // `heuristic-default` always returns a stage.
    unreachable!("override chain ended without a stage")
}

/// Time/vote classification, ignoring the indexer status entirely.
fn classify(
    window: &VotingWindow,
    tally: &VoteTally,
    schedule: &GovernanceSchedule,
    now: Timestamp,
) -> LifecycleStage {
    if now < window.start {
        return LifecycleStage::Pending;
    }
    if now <= window.end {
        return LifecycleStage::Active;
    }
    // Voting over: judge the tally. Zero participation and ties fail under
    // the default policy; abstain never participates.
    if schedule.policy.passes(tally.for_weight, tally.against_weight) {
        LifecycleStage::PendingQueue
    } else {
        LifecycleStage::Defeated
    }
}

/// Fallback window around `now` used when every estimation tier fails.
const AROUND_NOW_HALF_WINDOW_SECS: u64 = 86_400;

/// Compute the voting window through the fallback tiers, returning which
/// tier applied and whether the result is approximate.
fn compute_window(
    descriptor: &ProposalDescriptor,
    block_time: Option<&BlockTimeReference>,
    schedule: &GovernanceSchedule,
    now: Timestamp,
) -> (VotingWindow, WindowSource, bool) {
    // (a) Explicit timestamps from the indexer.
    if let (Some(start), Some(end)) = (descriptor.vote_start_at, descriptor.vote_end_at) {
        return (
            VotingWindow { start, end },
            WindowSource::ExplicitTimestamps,
            false,
        );
    }

    // (b) Block-number estimation, when both blocks and a reference exist.
    if let (Some(start_block), Some(end_block), Some(reference)) = (
        descriptor.vote_start_block,
        descriptor.vote_end_block,
        block_time,
    ) {
        let start = estimate_timestamp(start_block, Some(reference), now);
        let end = estimate_timestamp(end_block, Some(reference), now);
        return (
            VotingWindow {
                start: start.timestamp,
                end: end.timestamp,
            },
            WindowSource::BlockEstimate,
            false,
        );
    }

    // (c) Schedule estimation from the creation time. A zero voting period
    // cannot produce a usable window, so it falls through.
    if schedule.voting_period_blocks > 0 {
        let interval = block_time
            .map(|r| r.block_interval_secs)
            .unwrap_or(schedule.block_interval_secs);
        let start = descriptor
            .created_at
            .saturating_add_secs(schedule.delay_secs(interval));
        let end = start.saturating_add_secs(schedule.period_secs(interval));
        return (
            VotingWindow { start, end },
            WindowSource::ScheduleEstimate,
            true,
        );
    }

    // (d) Last resort: a symmetric window around now.
    (
        VotingWindow {
            start: now.saturating_sub_secs(AROUND_NOW_HALF_WINDOW_SECS),
            end: now.saturating_add_secs(AROUND_NOW_HALF_WINDOW_SECS),
        },
        WindowSource::AroundNow,
        true,
    )
}
