//! OS signal handling.
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - SIGINT and SIGTERM both map to graceful shutdown
//! - Signal registration failure is logged, not fatal; the process can
//!   still be stopped by other means

use tokio::signal;

use crate::lifecycle::shutdown::Shutdown;

/// Wait for SIGINT or SIGTERM, then trigger `shutdown`.
///
/// Intended to be spawned alongside the check loop.
pub async fn shutdown_on_signal(shutdown: Shutdown) {
    wait_for_signal().await;
    shutdown.trigger();
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal as unix_signal, SignalKind};

    let mut term = match unix_signal(SignalKind::terminate()) {
        Ok(term) => term,
        Err(e) => {
            tracing::error!(error = %e, "failed to register SIGTERM handler");
            let _ = signal::ctrl_c().await;
            tracing::info!("received SIGINT, shutting down");
            return;
        }
    };

    tokio::select! {
        _ = signal::ctrl_c() => tracing::info!("received SIGINT, shutting down"),
        _ = term.recv() => tracing::info!("received SIGTERM, shutting down"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("received ctrl-c, shutting down");
}
