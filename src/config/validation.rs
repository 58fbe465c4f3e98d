//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the probe targets are usable http(s) URLs
//! - Validate value ranges (threshold >= 1, timeouts nonzero)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: `BouncerConfig` in, `Result<(), Vec<ValidationError>>` out
//! - Runs before the config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::BouncerConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("check.sites must list at least one site to probe")]
    NoSites,

    #[error("check.sites[{index}] ({site:?}) is not a valid URL: {source}")]
    UnparseableSite {
        index: usize,
        site: String,
        source: url::ParseError,
    },

    #[error("check.sites[{index}] ({site:?}) must use http or https, got {scheme:?}")]
    UnsupportedScheme {
        index: usize,
        site: String,
        scheme: String,
    },

    #[error("check.sites[{index}] ({site:?}) has no host")]
    MissingHost { index: usize, site: String },

    #[error("check.failures must be at least 1")]
    ZeroFailureThreshold,

    #[error("check.{field} must be nonzero")]
    ZeroDuration { field: &'static str },

    #[error("observability.metrics_address {addr:?} is not a socket address")]
    BadMetricsAddress { addr: String },

    #[error("observability.log_format must be \"pretty\" or \"json\", got {format:?}")]
    BadLogFormat { format: String },
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &BouncerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.check.sites.is_empty() {
        errors.push(ValidationError::NoSites);
    }
    for (index, site) in config.check.sites.iter().enumerate() {
        match Url::parse(site) {
            Ok(url) => {
                if !matches!(url.scheme(), "http" | "https") {
                    errors.push(ValidationError::UnsupportedScheme {
                        index,
                        site: site.clone(),
                        scheme: url.scheme().to_string(),
                    });
                } else if url.host_str().is_none() {
                    errors.push(ValidationError::MissingHost {
                        index,
                        site: site.clone(),
                    });
                }
            }
            Err(source) => errors.push(ValidationError::UnparseableSite {
                index,
                site: site.clone(),
                source,
            }),
        }
    }

    if config.check.failures == 0 {
        errors.push(ValidationError::ZeroFailureThreshold);
    }

    let nonzero = [
        ("check_interval_secs", config.check.check_interval_secs),
        ("check_timeout_secs", config.check.check_timeout_secs),
        ("retry_interval_secs", config.check.retry_interval_secs),
        ("bounce_duration_secs", config.check.bounce_duration_secs),
    ];
    for (field, value) in nonzero {
        if value == 0 {
            errors.push(ValidationError::ZeroDuration { field });
        }
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<std::net::SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::BadMetricsAddress {
            addr: config.observability.metrics_address.clone(),
        });
    }

    if !matches!(config.observability.log_format.as_str(), "pretty" | "json") {
        errors.push(ValidationError::BadLogFormat {
            format: config.observability.log_format.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_sites(sites: &[&str]) -> BouncerConfig {
        let mut config = BouncerConfig::default();
        config.check.sites = sites.iter().map(|s| s.to_string()).collect();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        let config = with_sites(&["https://example.com/", "http://192.0.2.1/health"]);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_sites_rejected() {
        let config = BouncerConfig::default();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::NoSites)));
    }

    #[test]
    fn test_all_errors_reported_in_one_pass() {
        let mut config = with_sites(&["ftp://example.com/", "not a url"]);
        config.check.failures = 0;
        config.check.check_timeout_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::UnsupportedScheme { index: 0, .. })));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::UnparseableSite { index: 1, .. })));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::ZeroFailureThreshold)));
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::ZeroDuration {
                field: "check_timeout_secs"
            }
        )));
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = with_sites(&["https://example.com/"]);
        config.observability.metrics_address = "not-an-addr".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::BadMetricsAddress { .. })));
    }
}
