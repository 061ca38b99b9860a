//! Feed configuration with TOML file support.

use crate::error::FeedError;
use crate::refresher::RefreshSettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the periodic refresh loops.
///
/// Can be loaded from a TOML file via [`FeedConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Seconds between chain-head fetches.
    #[serde(default = "default_block_refresh_secs")]
    pub block_refresh_secs: u64,

    /// Seconds between live vote-tally fetches.
    #[serde(default = "default_tally_refresh_secs")]
    pub tally_refresh_secs: u64,

    /// Seconds between proposal-list fetches.
    #[serde(default = "default_proposal_refresh_secs")]
    pub proposal_refresh_secs: u64,

    /// Seconds between governance-configuration fetches.
    #[serde(default = "default_config_refresh_secs")]
    pub config_refresh_secs: u64,

    /// Per-fetch timeout in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Retries after the first failed attempt of one refresh.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial backoff between retries, in milliseconds. Doubles per retry.
    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,

    /// Decimals of the governance token, for raw-weight conversion.
    #[serde(default = "default_token_decimals")]
    pub token_decimals: u32,

    /// Average block interval of the target chain, in seconds.
    #[serde(default = "default_block_interval_secs")]
    pub block_interval_secs: u64,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_block_refresh_secs() -> u64 {
    15
}

fn default_tally_refresh_secs() -> u64 {
    30
}

fn default_proposal_refresh_secs() -> u64 {
    60
}

fn default_config_refresh_secs() -> u64 {
    300
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    3
}

fn default_backoff_base_ms() -> u64 {
    500
}

fn default_token_decimals() -> u32 {
    18
}

fn default_block_interval_secs() -> u64 {
    12
}

// ── Impl ───────────────────────────────────────────────────────────────

impl FeedConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, FeedError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| FeedError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, FeedError> {
        toml::from_str(s).map_err(|e| FeedError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("FeedConfig is always serializable to TOML")
    }

    /// Refresh settings for a loop running at `interval_secs`.
    pub fn settings(&self, interval_secs: u64) -> RefreshSettings {
        RefreshSettings {
            interval: Duration::from_secs(interval_secs),
            timeout: Duration::from_secs(self.fetch_timeout_secs),
            max_retries: self.max_retries,
            backoff_base: Duration::from_millis(self.backoff_base_ms),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            block_refresh_secs: default_block_refresh_secs(),
            tally_refresh_secs: default_tally_refresh_secs(),
            proposal_refresh_secs: default_proposal_refresh_secs(),
            config_refresh_secs: default_config_refresh_secs(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            max_retries: default_max_retries(),
            backoff_base_ms: default_backoff_base_ms(),
            token_decimals: default_token_decimals(),
            block_interval_secs: default_block_interval_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = FeedConfig::default();
        let toml_str = config.to_toml_string();
        let parsed = FeedConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.block_refresh_secs, config.block_refresh_secs);
        assert_eq!(parsed.max_retries, config.max_retries);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = FeedConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.block_refresh_secs, 15);
        assert_eq!(config.tally_refresh_secs, 30);
        assert_eq!(config.token_decimals, 18);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            tally_refresh_secs = 45
            block_interval_secs = 2
        "#;
        let config = FeedConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.tally_refresh_secs, 45);
        assert_eq!(config.block_interval_secs, 2);
        assert_eq!(config.max_retries, 3); // default
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = FeedConfig::from_toml_file("/nonexistent/govlens.toml");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, FeedError::Config(_)));
    }

    #[test]
    fn settings_derive_from_config() {
        let config = FeedConfig::default();
        let s = config.settings(config.block_refresh_secs);
        assert_eq!(s.interval, Duration::from_secs(15));
        assert_eq!(s.timeout, Duration::from_secs(10));
        assert_eq!(s.max_retries, 3);
    }
}
