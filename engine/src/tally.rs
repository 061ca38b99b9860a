//! Vote tally aggregation: precedence between the live feed and the
//! cached indexer snapshot.

use govlens_types::{Freshness, VoteTally};

/// Pick the authoritative tally for a proposal.
///
/// A live tally wins outright regardless of any cached one. With only a
/// cached tally, use it. With neither, the answer is the zero tally; no
/// observed votes is the default state, not an error.
pub fn resolve_tally(cached: Option<&VoteTally>, live: Option<&VoteTally>) -> VoteTally {
    match (live, cached) {
        (Some(live), _) => *live,
        (None, Some(cached)) => *cached,
        (None, None) => VoteTally::zero(Freshness::Cached),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use govlens_types::VoteWeight;

    fn tally(for_votes: u64, freshness: Freshness) -> VoteTally {
        VoteTally {
            for_weight: VoteWeight::from_whole(for_votes),
            against_weight: VoteWeight::ZERO,
            abstain_weight: VoteWeight::ZERO,
            voter_count: 1,
            freshness,
        }
    }

    #[test]
    fn live_wins_over_cached() {
        let cached = tally(10, Freshness::Cached);
        let live = tally(20, Freshness::Live);
        let resolved = resolve_tally(Some(&cached), Some(&live));
        assert_eq!(resolved.for_weight, VoteWeight::from_whole(20));
        assert_eq!(resolved.freshness, Freshness::Live);
    }

    #[test]
    fn cached_used_when_no_live() {
        let cached = tally(10, Freshness::Cached);
        let resolved = resolve_tally(Some(&cached), None);
        assert_eq!(resolved.for_weight, VoteWeight::from_whole(10));
    }

    #[test]
    fn absence_resolves_to_zero_tally() {
        let resolved = resolve_tally(None, None);
        assert!(resolved.for_weight.is_zero());
        assert!(resolved.against_weight.is_zero());
        assert!(resolved.abstain_weight.is_zero());
        assert_eq!(resolved.voter_count, 0);
    }

    #[test]
    fn live_wins_even_when_smaller() {
        // Precedence is by freshness, never by magnitude.
        let cached = tally(1_000, Freshness::Cached);
        let live = tally(1, Freshness::Live);
        let resolved = resolve_tally(Some(&cached), Some(&live));
        assert_eq!(resolved.for_weight, VoteWeight::from_whole(1));
    }
}
