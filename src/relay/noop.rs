//! No-op relay for platforms without the hardware.

use std::time::Duration;

use tokio::time;

use crate::relay::{Relay, RelayError};

/// Relay substitute that logs the pulse and holds for the duration.
#[derive(Debug, Default)]
pub struct NoopRelay;

impl Relay for NoopRelay {
    async fn trigger(&mut self, duration: Duration) {
        tracing::info!(?duration, "relay pulse (no-op)");
        time::sleep(duration).await;
    }

    fn close(self) -> Result<(), RelayError> {
        Ok(())
    }
}
