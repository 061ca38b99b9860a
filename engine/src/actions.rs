//! Action gate: which governance actions a viewer may take right now.
//!
//! Each rule is independent; several actions can be enabled at once. The
//! gate enforces every precondition itself, so a caller attempting to
//! bypass the UI still cannot obtain an action its context does not
//! justify.

use crate::resolver::{LifecycleStage, ResolvedStatus};
use govlens_types::CallerContext;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A governance action the dashboard can offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Action {
    Delegate,
    Vote,
    Queue,
    Execute,
}

/// Derive the set of permitted actions from the resolved status and the
/// caller's own facts.
///
/// No action is ever permitted without a connected wallet.
pub fn permitted_actions(status: &ResolvedStatus, ctx: &CallerContext) -> BTreeSet<Action> {
    let mut actions = BTreeSet::new();
    if !ctx.wallet_connected {
        return actions;
    }

    // Delegation makes sense only for holders who have not yet activated
    // their voting power. The balance comes from an external contract read.
    if ctx.voting_power.is_zero() && !ctx.token_balance.is_zero() {
        actions.insert(Action::Delegate);
    }

    if status.stage == LifecycleStage::Active && !ctx.voting_power.is_zero() && !ctx.has_voted {
        actions.insert(Action::Vote);
    }

    if status.stage == LifecycleStage::PendingQueue {
        actions.insert(Action::Queue);
    }

    if status.stage == LifecycleStage::Queued {
        actions.insert(Action::Execute);
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{VotingWindow, WindowSource};
    use govlens_types::{Timestamp, VoteWeight};

    fn status(stage: LifecycleStage) -> ResolvedStatus {
        ResolvedStatus {
            stage,
            voting_window: VotingWindow {
                start: Timestamp::new(1_000),
                end: Timestamp::new(2_000),
            },
            window_source: WindowSource::ExplicitTimestamps,
            approximate_window: false,
        }
    }

    fn voter() -> CallerContext {
        CallerContext {
            voting_power: VoteWeight::from_whole(10),
            token_balance: VoteWeight::from_whole(10),
            has_voted: false,
            wallet_connected: true,
        }
    }

    #[test]
    fn nothing_permitted_without_wallet() {
        let mut ctx = voter();
        ctx.wallet_connected = false;
        for stage in [
            LifecycleStage::Pending,
            LifecycleStage::Active,
            LifecycleStage::PendingQueue,
            LifecycleStage::Queued,
            LifecycleStage::Executed,
        ] {
            assert!(permitted_actions(&status(stage), &ctx).is_empty(), "stage={stage:?}");
        }
    }

    #[test]
    fn vote_requires_active_power_and_not_voted() {
        let ctx = voter();
        assert!(permitted_actions(&status(LifecycleStage::Active), &ctx).contains(&Action::Vote));

        // Flip each condition individually; vote must disappear.
        let mut no_power = ctx;
        no_power.voting_power = VoteWeight::ZERO;
        assert!(!permitted_actions(&status(LifecycleStage::Active), &no_power).contains(&Action::Vote));

        let mut voted = ctx;
        voted.has_voted = true;
        assert!(!permitted_actions(&status(LifecycleStage::Active), &voted).contains(&Action::Vote));

        assert!(!permitted_actions(&status(LifecycleStage::Pending), &ctx).contains(&Action::Vote));
    }

    #[test]
    fn delegate_requires_balance_without_power() {
        let mut holder = voter();
        holder.voting_power = VoteWeight::ZERO;
        let actions = permitted_actions(&status(LifecycleStage::Pending), &holder);
        assert!(actions.contains(&Action::Delegate));

        // Power already delegated in: no delegate prompt.
        assert!(!permitted_actions(&status(LifecycleStage::Pending), &voter())
            .contains(&Action::Delegate));

        // No balance at all: nothing to delegate.
        let mut empty = holder;
        empty.token_balance = VoteWeight::ZERO;
        assert!(!permitted_actions(&status(LifecycleStage::Pending), &empty)
            .contains(&Action::Delegate));
    }

    #[test]
    fn queue_only_in_pending_queue() {
        let ctx = voter();
        assert!(permitted_actions(&status(LifecycleStage::PendingQueue), &ctx)
            .contains(&Action::Queue));
        assert!(!permitted_actions(&status(LifecycleStage::Active), &ctx).contains(&Action::Queue));
        assert!(!permitted_actions(&status(LifecycleStage::Queued), &ctx).contains(&Action::Queue));
    }

    #[test]
    fn execute_only_in_queued() {
        let ctx = voter();
        assert!(permitted_actions(&status(LifecycleStage::Queued), &ctx).contains(&Action::Execute));
        assert!(!permitted_actions(&status(LifecycleStage::PendingQueue), &ctx)
            .contains(&Action::Execute));
        assert!(!permitted_actions(&status(LifecycleStage::Executed), &ctx)
            .contains(&Action::Execute));
    }

    #[test]
    fn multiple_actions_can_coexist() {
        // A holder with no power during PendingQueue sees delegate + queue.
        let mut holder = voter();
        holder.voting_power = VoteWeight::ZERO;
        let actions = permitted_actions(&status(LifecycleStage::PendingQueue), &holder);
        assert!(actions.contains(&Action::Delegate));
        assert!(actions.contains(&Action::Queue));
        assert_eq!(actions.len(), 2);
    }

    #[test]
    fn terminal_stages_offer_no_stage_actions() {
        let ctx = voter();
        for stage in [LifecycleStage::Executed, LifecycleStage::Canceled, LifecycleStage::Defeated] {
            let actions = permitted_actions(&status(stage), &ctx);
            assert!(!actions.contains(&Action::Vote));
            assert!(!actions.contains(&Action::Queue));
            assert!(!actions.contains(&Action::Execute));
        }
    }
}
