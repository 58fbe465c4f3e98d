//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! check loop + probe stages
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters, gauges)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Probe stage events (DNS, connect, TLS) are tracing events; a subscriber
//!   is the diagnostic hook
//! - Metrics are optional and informational; the watchdog behaves
//!   identically with them disabled

pub mod logging;
pub mod metrics;
