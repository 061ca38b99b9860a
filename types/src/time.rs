//! Timestamp type used throughout the dashboard core.
//!
//! Timestamps are Unix epoch seconds (UTC). Block-time estimation produces
//! values of this type; callers must treat estimated timestamps as
//! approximations, not guarantees.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Get the current system time as a `Timestamp`.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_secs();
        Self(secs)
    }

    /// Validate a signed epoch value as reported by an external feed.
    ///
    /// A negative timestamp indicates an upstream data-integrity problem
    /// and is rejected rather than coerced.
    pub fn try_from_signed(secs: i64) -> Result<Self, ModelError> {
        if secs < 0 {
            return Err(ModelError::NegativeTimestamp { value: secs });
        }
        Ok(Self(secs as u64))
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// This timestamp shifted forward by `secs`, saturating at `u64::MAX`.
    pub fn saturating_add_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }

    /// This timestamp shifted backward by `secs`, saturating at the epoch.
    pub fn saturating_sub_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_sub(secs))
    }

    /// Seconds elapsed since this timestamp (relative to `now`).
    pub fn elapsed_since(&self, now: Timestamp) -> u64 {
        now.0.saturating_sub(self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturating_add_and_sub() {
        let t = Timestamp::new(100);
        assert_eq!(t.saturating_add_secs(50), Timestamp::new(150));
        assert_eq!(t.saturating_sub_secs(50), Timestamp::new(50));
        assert_eq!(t.saturating_sub_secs(200), Timestamp::EPOCH);
        assert_eq!(
            Timestamp::new(u64::MAX).saturating_add_secs(1),
            Timestamp::new(u64::MAX)
        );
    }

    #[test]
    fn elapsed_since_clamps_at_zero() {
        let t = Timestamp::new(500);
        assert_eq!(t.elapsed_since(Timestamp::new(800)), 300);
        assert_eq!(t.elapsed_since(Timestamp::new(100)), 0);
    }
}
