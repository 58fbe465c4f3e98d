//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the TOML config
//! file. Defaults mirror the long-standing daemon defaults, so a config file
//! only needs to set `check.sites` and whatever else differs.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

/// Root configuration for the watchdog.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BouncerConfig {
    /// Probe targets and scheduling policy.
    pub check: CheckConfig,

    /// Relay output wiring.
    pub relay: RelayConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Probe targets and the check/retry/bounce schedule.
///
/// Interval-scale durations are whole seconds; jitter bounds are in
/// milliseconds so sub-second skew is expressible.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Sites to probe, visited round-robin. Must be http(s) URLs.
    pub sites: Vec<String>,

    /// Base sleep after a successful check, in seconds.
    pub check_interval_secs: u64,

    /// Random skew applied to the check interval, plus or minus, in
    /// milliseconds.
    pub check_jitter_ms: u64,

    /// Total time allowed for a single probe attempt, in seconds.
    pub check_timeout_secs: u64,

    /// Base sleep after a failed check below the threshold, in seconds.
    pub retry_interval_secs: u64,

    /// Random skew applied to the retry interval, plus or minus, in
    /// milliseconds.
    pub retry_jitter_ms: u64,

    /// Consecutive failures that trigger a bounce.
    pub failures: u32,

    /// How long the relay is held active during a bounce, in seconds.
    pub bounce_duration_secs: u64,

    /// Sleep after a bounce before normal checking resumes, in seconds.
    /// Deliberately unjittered.
    pub bounce_timeout_secs: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            sites: Vec::new(),
            check_interval_secs: 120,
            check_jitter_ms: 10_000,
            check_timeout_secs: 30,
            retry_interval_secs: 20,
            retry_jitter_ms: 4_000,
            failures: 5,
            bounce_duration_secs: 10,
            bounce_timeout_secs: 600,
        }
    }
}

impl CheckConfig {
    /// Parse the configured sites into URLs.
    ///
    /// Validation runs this first, so post-validation callers never see an
    /// error here.
    pub fn parsed_sites(&self) -> Result<Vec<Url>, url::ParseError> {
        self.sites.iter().map(|s| Url::parse(s)).collect()
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }

    pub fn check_jitter(&self) -> Duration {
        Duration::from_millis(self.check_jitter_ms)
    }

    pub fn check_timeout(&self) -> Duration {
        Duration::from_secs(self.check_timeout_secs)
    }

    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(self.retry_interval_secs)
    }

    pub fn retry_jitter(&self) -> Duration {
        Duration::from_millis(self.retry_jitter_ms)
    }

    pub fn bounce_duration(&self) -> Duration {
        Duration::from_secs(self.bounce_duration_secs)
    }

    pub fn bounce_timeout(&self) -> Duration {
        Duration::from_secs(self.bounce_timeout_secs)
    }
}

/// Relay output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Drive a real relay. When false (or when hardware support is not
    /// compiled in) bounces are logged but nothing is actuated.
    pub enabled: bool,

    /// BCM pin (not board pinout) driven high for the bounce duration.
    pub high_pin: u8,

    /// Optional BCM pin held low as a ground reference.
    pub low_pin: Option<u8>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            high_pin: 21,
            low_pin: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format: "pretty" or "json".
    pub log_format: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_daemon_defaults() {
        let config = BouncerConfig::default();
        assert_eq!(config.check.check_interval(), Duration::from_secs(120));
        assert_eq!(config.check.check_jitter(), Duration::from_secs(10));
        assert_eq!(config.check.check_timeout(), Duration::from_secs(30));
        assert_eq!(config.check.retry_interval(), Duration::from_secs(20));
        assert_eq!(config.check.retry_jitter(), Duration::from_secs(4));
        assert_eq!(config.check.failures, 5);
        assert_eq!(config.check.bounce_duration(), Duration::from_secs(10));
        assert_eq!(config.check.bounce_timeout(), Duration::from_secs(600));
        assert_eq!(config.relay.high_pin, 21);
        assert_eq!(config.relay.low_pin, None);
        assert!(config.relay.enabled);
    }

    #[test]
    fn test_minimal_toml_round_trip() {
        let toml_src = r#"
            [check]
            sites = ["https://example.com/", "http://one.one.one.one/"]
            failures = 2
            retry_jitter_ms = 1500

            [relay]
            high_pin = 17
            low_pin = 27
        "#;
        let config: BouncerConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.check.sites.len(), 2);
        assert_eq!(config.check.failures, 2);
        assert_eq!(config.check.retry_jitter(), Duration::from_millis(1500));
        // Unset keys keep their defaults.
        assert_eq!(config.check.check_interval_secs, 120);
        assert_eq!(config.relay.high_pin, 17);
        assert_eq!(config.relay.low_pin, Some(27));
        assert_eq!(config.observability.log_level, "info");
    }
}
