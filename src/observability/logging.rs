//! Structured logging setup.
//!
//! # Design Decisions
//! - `tracing` for structured events throughout the crate
//! - `RUST_LOG` overrides the configured level when set
//! - JSON output for production log shippers, pretty for terminals

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Initialize the global tracing subscriber.
///
/// `level_override` wins over the configured level (used by `--debug`).
pub fn init(config: &ObservabilityConfig, level_override: Option<&str>) {
    let level = level_override.unwrap_or(&config.log_level);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bouncer={level}")));

    let registry = tracing_subscriber::registry().with(filter);
    if config.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
