//! Connectivity probing subsystem.
//!
//! # Data Flow
//! ```text
//! check loop
//!     → Probe::check(site, timeout)
//!         → http.rs: DNS → TCP connect → TLS handshake → one GET
//!         → each stage emits a structured diagnostic event
//!     → Ok(()) or ProbeError (collapsed to one "failed" outcome upstream)
//! ```
//!
//! # Design Decisions
//! - Any response received without a transport error is success; the HTTP
//!   status code is irrelevant
//! - One fresh attempt per invocation; no connection reuse, no retries —
//!   retry policy belongs to the check loop
//! - The timeout bounds the whole attempt; on expiry the in-flight stage is
//!   cancelled, not merely abandoned

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use url::Url;

pub mod http;

pub use http::HttpProber;

/// One bounded-time reachability check against a single target.
pub trait Probe {
    /// Probe `site`, returning no later than `timeout` after invocation.
    fn check(
        &self,
        site: &Url,
        timeout: Duration,
    ) -> impl Future<Output = Result<(), ProbeError>> + Send;
}

/// Why a probe failed.
///
/// The check loop treats every variant identically; the distinction exists
/// only for diagnostics.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("unsupported probe target: {0}")]
    InvalidTarget(String),

    #[error("name resolution failed: {0}")]
    Resolve(#[source] std::io::Error),

    #[error("no addresses resolved for {0}")]
    NoAddresses(String),

    #[error("connection failed: {0}")]
    Connect(#[source] std::io::Error),

    #[error("TLS handshake failed: {0}")]
    Tls(#[source] std::io::Error),

    #[error("HTTP exchange failed: {0}")]
    Http(#[from] hyper::Error),

    #[error("deadline exceeded")]
    DeadlineExceeded,
}
