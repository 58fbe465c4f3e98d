//! Metrics collection and exposition.
//!
//! # Metrics
//! - `bouncer_checks_total` (counter): probes by site and result
//! - `bouncer_failures_total` (counter): failed probes
//! - `bouncer_bounces_total` (counter): relay pulses
//! - `bouncer_consecutive_failures` (gauge): current failure streak
//!
//! # Design Decisions
//! - The `metrics` facade keeps the check loop free of exporter details;
//!   with no exporter installed every call is a no-op
//! - Metrics never influence control flow

use std::net::SocketAddr;

use metrics::{counter, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter, serving scrapes on `addr`.
pub fn init(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "failed to install metrics exporter"),
    }
}

/// Record the outcome of one probe.
pub fn record_check(site: &str, success: bool) {
    let result = if success { "success" } else { "failure" };
    counter!("bouncer_checks_total", "site" => site.to_string(), "result" => result).increment(1);
    if !success {
        counter!("bouncer_failures_total").increment(1);
    }
}

/// Record the current consecutive-failure streak.
pub fn record_consecutive_failures(count: u32) {
    gauge!("bouncer_consecutive_failures").set(f64::from(count));
}

/// Record one relay bounce.
pub fn record_bounce() {
    counter!("bouncer_bounces_total").increment(1);
}
