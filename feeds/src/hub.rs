//! Feed hub: owns the per-source snapshot caches and wires them into the
//! resolution engine.
//!
//! The hub is the seam between the async refresh world and the pure engine:
//! spawning the refreshers is async, but [`FeedHub::resolve_proposal`] is
//! synchronous and never blocks on a refresh in flight.

use crate::cache::SnapshotCache;
use crate::config::FeedConfig;
use crate::refresher::{
    run_block_time_refresher, run_proposal_refresher, run_schedule_refresher, run_tally_refresher,
};
use crate::shutdown::ShutdownController;
use crate::sources::{BlockSource, GovernanceConfigSource, ProposalSource, TallySource};
use govlens_engine::{resolve, resolve_tally, GovernanceSchedule, ResolvedStatus};
use govlens_types::{
    BlockTimeReference, ProposalDescriptor, ProposalId, Timestamp, VoteTally,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Shared snapshot caches for everything the resolver consumes.
#[derive(Clone, Default)]
pub struct FeedHub {
    proposals: SnapshotCache<Vec<ProposalDescriptor>>,
    tallies: SnapshotCache<HashMap<ProposalId, VoteTally>>,
    block_time: SnapshotCache<BlockTimeReference>,
    schedule: SnapshotCache<GovernanceSchedule>,
}

impl FeedHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent proposal list, if any refresh has succeeded yet.
    pub fn proposals(&self) -> Option<Arc<Vec<ProposalDescriptor>>> {
        self.proposals.snapshot()
    }

    /// The indexer's cached tally for one proposal.
    pub fn cached_tally(&self, id: &ProposalId) -> Option<VoteTally> {
        self.tallies.snapshot().and_then(|map| map.get(id).copied())
    }

    /// The current block-time reference, if any refresh has succeeded yet.
    pub fn block_time(&self) -> Option<Arc<BlockTimeReference>> {
        self.block_time.snapshot()
    }

    /// The governance schedule; hard-coded defaults until the config read
    /// succeeds for the first time.
    pub fn schedule(&self) -> GovernanceSchedule {
        self.schedule
            .snapshot()
            .map(|s| *s)
            .unwrap_or_default()
    }

    /// Resolve one proposal against the current snapshots.
    ///
    /// `live_tally` is the caller's authoritative fresh fetch, when it has
    /// one; it wins over the indexer snapshot. Synchronous, running
    /// entirely on cached data and engine fallbacks.
    pub fn resolve_proposal(
        &self,
        descriptor: &ProposalDescriptor,
        live_tally: Option<&VoteTally>,
        now: Timestamp,
    ) -> ResolvedStatus {
        let cached = self.cached_tally(&descriptor.id);
        let tally = resolve_tally(cached.as_ref(), live_tally);
        let block_time = self.block_time();
        let status = resolve(
            descriptor,
            &tally,
            block_time.as_deref(),
            &self.schedule(),
            now,
        );
        tracing::debug!(
            proposal = %descriptor.id,
            stage = ?status.stage,
            window = %govlens_utils::format_window(
                status.voting_window.start,
                status.voting_window.end,
                now,
            ),
            "resolved from cached snapshots"
        );
        status
    }

    /// Spawn one refresher per source. Handles are joined by the caller at
    /// shutdown.
    pub fn spawn_refreshers<P, T, B, G>(
        &self,
        proposal_source: P,
        tally_source: T,
        block_source: B,
        config_source: G,
        config: &FeedConfig,
        shutdown: &ShutdownController,
    ) -> Vec<JoinHandle<()>>
    where
        P: ProposalSource + Send + Sync + 'static,
        T: TallySource + Send + Sync + 'static,
        B: BlockSource + Send + Sync + 'static,
        G: GovernanceConfigSource + Send + Sync + 'static,
    {
        vec![
            tokio::spawn(run_proposal_refresher(
                proposal_source,
                self.proposals.clone(),
                config.settings(config.proposal_refresh_secs),
                shutdown.subscribe(),
            )),
            tokio::spawn(run_tally_refresher(
                tally_source,
                self.proposals.clone(),
                self.tallies.clone(),
                config.token_decimals,
                config.settings(config.tally_refresh_secs),
                shutdown.subscribe(),
            )),
            tokio::spawn(run_block_time_refresher(
                block_source,
                self.block_time.clone(),
                config.block_interval_secs,
                config.settings(config.block_refresh_secs),
                shutdown.subscribe(),
            )),
            tokio::spawn(run_schedule_refresher(
                config_source,
                self.schedule.clone(),
                config.settings(config.config_refresh_secs),
                shutdown.subscribe(),
            )),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use govlens_engine::LifecycleStage;
    use govlens_types::{AccountId, Freshness, IndexerStatus, VoteWeight};

    fn descriptor() -> ProposalDescriptor {
        ProposalDescriptor {
            id: ProposalId::new("prop-1"),
            proposer: AccountId::new("0xproposer"),
            description_raw: "Hub test: body".to_string(),
            created_at: Timestamp::new(1_000),
            vote_start_block: None,
            vote_end_block: None,
            vote_start_at: Some(Timestamp::new(2_000)),
            vote_end_at: Some(Timestamp::new(3_000)),
            raw_status: IndexerStatus::Active,
            queued_at: None,
            executed_at: None,
            canceled_at: None,
        }
    }

    fn tally(for_votes: u64, freshness: Freshness) -> VoteTally {
        VoteTally {
            for_weight: VoteWeight::from_whole(for_votes),
            against_weight: VoteWeight::from_whole(10),
            abstain_weight: VoteWeight::ZERO,
            voter_count: 2,
            freshness,
        }
    }

    #[test]
    fn empty_hub_resolves_with_fallbacks() {
        let hub = FeedHub::new();
        let status = hub.resolve_proposal(&descriptor(), None, Timestamp::new(2_500));
        // No tallies anywhere, window from explicit timestamps: Active.
        assert_eq!(status.stage, LifecycleStage::Active);
    }

    #[test]
    fn live_tally_wins_over_hub_snapshot() {
        let hub = FeedHub::new();
        let mut map = HashMap::new();
        map.insert(ProposalId::new("prop-1"), tally(5, Freshness::Cached));
        hub.tallies.replace(map);

        // Cached says defeated (5 for / 10 against); live says passed.
        let live = tally(100, Freshness::Live);
        let after_end = Timestamp::new(4_000);

        let with_live = hub.resolve_proposal(&descriptor(), Some(&live), after_end);
        assert_eq!(with_live.stage, LifecycleStage::PendingQueue);

        let without_live = hub.resolve_proposal(&descriptor(), None, after_end);
        assert_eq!(without_live.stage, LifecycleStage::Defeated);
    }

    #[test]
    fn schedule_defaults_until_config_arrives() {
        let hub = FeedHub::new();
        assert_eq!(hub.schedule(), GovernanceSchedule::default());

        hub.schedule.replace(GovernanceSchedule::with_periods(10, 100));
        assert_eq!(hub.schedule().voting_delay_blocks, 10);
    }
}
