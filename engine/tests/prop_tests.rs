use proptest::prelude::*;

use govlens_engine::{
    estimate_timestamp, permitted_actions, resolve, GovernanceSchedule, LifecycleStage,
};
use govlens_types::{
    AccountId, BlockNumber, BlockTimeReference, CallerContext, Freshness, IndexerStatus,
    ProposalDescriptor, ProposalId, Timestamp, VoteTally, VoteWeight,
};

fn descriptor(raw_status: IndexerStatus, start: u64, end: u64) -> ProposalDescriptor {
    ProposalDescriptor {
        id: ProposalId::new("prop-prop"),
        proposer: AccountId::new("0xproposer"),
        description_raw: "Prop: body".to_string(),
        created_at: Timestamp::new(1),
        vote_start_block: None,
        vote_end_block: None,
        vote_start_at: Some(Timestamp::new(start)),
        vote_end_at: Some(Timestamp::new(end)),
        raw_status,
        queued_at: None,
        executed_at: None,
        canceled_at: None,
    }
}

fn tally(for_votes: u64, against_votes: u64, abstain_votes: u64) -> VoteTally {
    VoteTally {
        for_weight: VoteWeight::from_whole(for_votes),
        against_weight: VoteWeight::from_whole(against_votes),
        abstain_weight: VoteWeight::from_whole(abstain_votes),
        voter_count: 3,
        freshness: Freshness::Live,
    }
}

proptest! {
    /// Block-time estimation is monotonic in the target block for any
    /// fixed reference.
    #[test]
    fn estimate_timestamp_monotonic(
        ref_block in 0u64..10_000_000,
        ref_ts in 0u64..10_000_000_000,
        interval in 1u64..60,
        b1 in 0u64..20_000_000,
        bump in 0u64..1_000_000,
    ) {
        let reference = BlockTimeReference::new(
            BlockNumber::new(ref_block),
            Timestamp::new(ref_ts),
            interval,
        );
        let now = Timestamp::new(0);
        let t1 = estimate_timestamp(BlockNumber::new(b1), Some(&reference), now);
        let t2 = estimate_timestamp(BlockNumber::new(b1 + bump), Some(&reference), now);
        prop_assert!(t1.timestamp <= t2.timestamp);
    }

    /// Terminal indexer statuses always win, for any tally and clock.
    #[test]
    fn terminal_override_holds(
        for_votes in 0u64..1_000_000,
        against_votes in 0u64..1_000_000,
        now in 0u64..10_000_000,
    ) {
        let cases = [
            (IndexerStatus::Queued, LifecycleStage::Queued),
            (IndexerStatus::Executed, LifecycleStage::Executed),
            (IndexerStatus::Canceled, LifecycleStage::Canceled),
        ];
        for (raw, expected) in cases {
            let status = resolve(
                &descriptor(raw, 1_000, 2_000),
                &tally(for_votes, against_votes, 0),
                None,
                &GovernanceSchedule::default(),
                Timestamp::new(now),
            );
            prop_assert_eq!(status.stage, expected);
        }
    }

    /// Inside the voting window the stage is Active for any tally; before
    /// it, Pending.
    #[test]
    fn window_classification_ignores_tally(
        for_votes in 0u64..1_000_000,
        against_votes in 0u64..1_000_000,
        abstain_votes in 0u64..1_000_000,
    ) {
        let d = descriptor(IndexerStatus::Pending, 1_000, 2_000);
        let t = tally(for_votes, against_votes, abstain_votes);
        let schedule = GovernanceSchedule::default();

        let before = resolve(&d, &t, None, &schedule, Timestamp::new(500));
        prop_assert_eq!(before.stage, LifecycleStage::Pending);

        let during = resolve(&d, &t, None, &schedule, Timestamp::new(1_500));
        prop_assert_eq!(during.stage, LifecycleStage::Active);
    }

    /// After the window, the outcome depends only on the decisive
    /// comparison: strictly more for than against passes, everything else
    /// (ties, minorities, zero participation) is defeat. Abstain is inert.
    #[test]
    fn post_window_outcome_is_majority_only(
        for_votes in 0u64..1_000_000,
        against_votes in 0u64..1_000_000,
        abstain_votes in 0u64..1_000_000,
    ) {
        let status = resolve(
            &descriptor(IndexerStatus::Active, 1_000, 2_000),
            &tally(for_votes, against_votes, abstain_votes),
            None,
            &GovernanceSchedule::default(),
            Timestamp::new(3_000),
        );
        let expected = if for_votes > against_votes {
            LifecycleStage::PendingQueue
        } else {
            LifecycleStage::Defeated
        };
        prop_assert_eq!(status.stage, expected);
    }

    /// A disconnected wallet gets no actions whatsoever.
    #[test]
    fn disconnected_wallet_gets_nothing(
        power in 0u64..1_000_000,
        balance in 0u64..1_000_000,
        has_voted in any::<bool>(),
        now in 0u64..10_000_000,
    ) {
        let ctx = CallerContext {
            voting_power: VoteWeight::from_whole(power),
            token_balance: VoteWeight::from_whole(balance),
            has_voted,
            wallet_connected: false,
        };
        let status = resolve(
            &descriptor(IndexerStatus::Active, 1_000, 2_000),
            &tally(100, 40, 0),
            None,
            &GovernanceSchedule::default(),
            Timestamp::new(now),
        );
        prop_assert!(permitted_actions(&status, &ctx).is_empty());
    }

    /// Resolution is idempotent: the same inputs give the same output.
    #[test]
    fn resolve_is_deterministic(
        for_votes in 0u64..1_000_000,
        against_votes in 0u64..1_000_000,
        now in 0u64..10_000_000,
    ) {
        let d = descriptor(IndexerStatus::Defeated, 1_000, 2_000);
        let t = tally(for_votes, against_votes, 0);
        let schedule = GovernanceSchedule::default();
        let a = resolve(&d, &t, None, &schedule, Timestamp::new(now));
        let b = resolve(&d, &t, None, &schedule, Timestamp::new(now));
        prop_assert_eq!(a, b);
    }
}
