//! Periodic refresh loops.
//!
//! One tokio task per source. Every fetch attempt runs under a timeout;
//! a failed refresh retries a bounded number of times with doubling
//! backoff, then gives up until the next tick. Failures never clear a
//! cache; readers keep the last good snapshot.

use crate::cache::SnapshotCache;
use crate::error::FeedError;
use crate::sources::{BlockSource, GovernanceConfigSource, ProposalSource, TallySource};
use govlens_engine::GovernanceSchedule;
use govlens_types::{BlockTimeReference, Freshness, ProposalDescriptor, ProposalId, VoteTally};
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::sync::broadcast;

/// Timing and retry policy for one refresh loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefreshSettings {
    /// Cadence of the loop.
    pub interval: Duration,
    /// Time limit for a single fetch attempt.
    pub timeout: Duration,
    /// Retries after the first failed attempt of one refresh.
    pub max_retries: u32,
    /// Initial retry backoff; doubles per retry, capped at [`MAX_BACKOFF`].
    pub backoff_base: Duration,
}

/// Upper bound on the retry backoff.
pub const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Run `fetch` under the timeout, retrying with exponential backoff up to
/// the configured cap. Returns the first success or the last failure.
async fn fetch_with_retry<T, F, Fut>(settings: &RefreshSettings, mut fetch: F) -> Result<T, FeedError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FeedError>>,
{
    let mut backoff = settings.backoff_base;
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        let outcome = match tokio::time::timeout(settings.timeout, fetch()).await {
            Ok(result) => result,
            Err(_) => Err(FeedError::Timeout),
        };
        match outcome {
            Ok(value) => return Ok(value),
            Err(error) if attempt > settings.max_retries => return Err(error),
            Err(error) => {
                tracing::debug!(error = %error, attempt, "fetch failed, retrying");
            }
        }
        tokio::time::sleep(backoff).await;
        backoff = (backoff * 2).min(MAX_BACKOFF);
    }
}

/// Refresh the block-time reference from the chain head.
pub async fn run_block_time_refresher<S: BlockSource>(
    source: S,
    cache: SnapshotCache<BlockTimeReference>,
    block_interval_secs: u64,
    settings: RefreshSettings,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut interval = tokio::time::interval(settings.interval);
    loop {
        tokio::select! {
            biased;
            _ = shutdown.recv() => {
                tracing::info!("block-time refresher shutting down");
                break;
            }
            _ = interval.tick() => {
                match fetch_with_retry(&settings, || source.fetch_latest_block()).await {
                    Ok(record) => match record.into_reference(block_interval_secs) {
                        Ok(reference) => {
                            tracing::debug!(block = %reference.reference_block, "block-time reference updated");
                            cache.replace(reference);
                        }
                        Err(error) => {
                            tracing::warn!(error = %error, "block feed returned malformed record");
                        }
                    },
                    Err(error) => {
                        tracing::warn!(error = %error, "block-time refresh failed, keeping cached reference");
                    }
                }
            }
        }
    }
}

/// Refresh the proposal list from the indexer.
pub async fn run_proposal_refresher<S: ProposalSource>(
    source: S,
    cache: SnapshotCache<Vec<ProposalDescriptor>>,
    settings: RefreshSettings,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut interval = tokio::time::interval(settings.interval);
    loop {
        tokio::select! {
            biased;
            _ = shutdown.recv() => {
                tracing::info!("proposal refresher shutting down");
                break;
            }
            _ = interval.tick() => {
                match fetch_with_retry(&settings, || source.fetch_proposals()).await {
                    Ok(records) => {
                        let converted: Result<Vec<_>, _> = records
                            .into_iter()
                            .map(|r| r.into_descriptor())
                            .collect();
                        match converted {
                            Ok(descriptors) => {
                                tracing::debug!(count = descriptors.len(), "proposal list updated");
                                cache.replace(descriptors);
                            }
                            Err(error) => {
                                tracing::warn!(error = %error, "proposal feed returned malformed record, keeping cached list");
                            }
                        }
                    }
                    Err(error) => {
                        tracing::warn!(error = %error, "proposal refresh failed, keeping cached list");
                    }
                }
            }
        }
    }
}

/// Refresh the indexer vote tallies for every known proposal.
///
/// Tallies fetched here carry [`Freshness::Cached`]: they are the indexer's
/// eventually-consistent snapshot. An authoritative per-proposal fetch made
/// by the caller supplies the `Live` side of the precedence.
pub async fn run_tally_refresher<S: TallySource>(
    source: S,
    proposals: SnapshotCache<Vec<ProposalDescriptor>>,
    cache: SnapshotCache<HashMap<ProposalId, VoteTally>>,
    token_decimals: u32,
    settings: RefreshSettings,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut interval = tokio::time::interval(settings.interval);
    loop {
        tokio::select! {
            biased;
            _ = shutdown.recv() => {
                tracing::info!("tally refresher shutting down");
                break;
            }
            _ = interval.tick() => {
                let ids: Vec<ProposalId> = proposals
                    .snapshot()
                    .map(|list| list.iter().map(|p| p.id.clone()).collect())
                    .unwrap_or_default();
                if ids.is_empty() {
                    continue;
                }
                match fetch_with_retry(&settings, || source.fetch_tallies(&ids)).await {
                    Ok(records) => {
                        let converted: Result<HashMap<_, _>, FeedError> = records
                            .into_iter()
                            .map(|r| r.into_tally(token_decimals, Freshness::Cached))
                            .collect();
                        match converted {
                            Ok(tallies) => {
                                tracing::debug!(count = tallies.len(), "vote tallies updated");
                                cache.replace(tallies);
                            }
                            Err(error) => {
                                tracing::warn!(error = %error, "tally feed returned malformed record, keeping cached tallies");
                            }
                        }
                    }
                    Err(error) => {
                        tracing::warn!(error = %error, "tally refresh failed, keeping cached tallies");
                    }
                }
            }
        }
    }
}

/// Refresh the governance schedule from the contract configuration.
pub async fn run_schedule_refresher<S: GovernanceConfigSource>(
    source: S,
    cache: SnapshotCache<GovernanceSchedule>,
    settings: RefreshSettings,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut interval = tokio::time::interval(settings.interval);
    loop {
        tokio::select! {
            biased;
            _ = shutdown.recv() => {
                tracing::info!("schedule refresher shutting down");
                break;
            }
            _ = interval.tick() => {
                match fetch_with_retry(&settings, || source.fetch_config()).await {
                    Ok(record) => match record.into_schedule() {
                        Ok(schedule) => {
                            tracing::debug!(
                                delay = schedule.voting_delay_blocks,
                                period = schedule.voting_period_blocks,
                                "governance schedule updated"
                            );
                            cache.replace(schedule);
                        }
                        Err(error) => {
                            tracing::warn!(error = %error, "governance config rejected, keeping defaults");
                        }
                    },
                    Err(error) => {
                        tracing::warn!(error = %error, "governance config refresh failed, keeping cached schedule");
                    }
                }
            }
        }
    }
}
