//! Per-viewer context for action gating.

use crate::weight::VoteWeight;
use serde::{Deserialize, Serialize};

/// Caller-specific facts needed to decide which governance actions a viewer
/// may take. Ephemeral: rebuilt per wallet, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerContext {
    /// Current voting power (delegated-in weight) of the caller.
    pub voting_power: VoteWeight,
    /// Underlying token balance, supplied by an external contract read.
    pub token_balance: VoteWeight,
    /// Whether the caller already voted on the proposal in question.
    pub has_voted: bool,
    /// Whether a wallet is connected at all.
    pub wallet_connected: bool,
}

impl CallerContext {
    /// A disconnected viewer: no wallet, no power, no balance.
    pub fn disconnected() -> Self {
        Self {
            voting_power: VoteWeight::ZERO,
            token_balance: VoteWeight::ZERO,
            has_voted: false,
            wallet_connected: false,
        }
    }
}
