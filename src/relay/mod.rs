//! Relay actuation subsystem.
//!
//! # Data Flow
//! ```text
//! startup: RelayConfig + compiled features
//!     → init() picks a driver exactly once
//!         → GpioRelay (feature "hardware"): drives real BCM pins
//!         → NoopRelay: logs and holds, nothing actuated
//! check loop: Relay::trigger(bounce_duration), awaited inline
//! process exit: Relay::close(), exactly once, never from the loop
//! ```
//!
//! # Design Decisions
//! - `trigger` is infallible at this layer; the loop holds no error policy
//!   for actuation
//! - The no-op driver holds for the full duration so the loop's timing is
//!   identical with and without hardware

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::config::RelayConfig;

#[cfg(feature = "hardware")]
pub mod gpio;
pub mod noop;

#[cfg(feature = "hardware")]
pub use gpio::GpioRelay;
pub use noop::NoopRelay;

/// The actuator capability consumed by the check loop.
pub trait Relay {
    /// Drive the output active, hold for `duration`, then deactivate.
    fn trigger(&mut self, duration: Duration) -> impl Future<Output = ()> + Send;

    /// Release hardware resources. Called once at process shutdown.
    fn close(self) -> Result<(), RelayError>;
}

/// Relay hardware error.
#[derive(Debug, Error)]
pub enum RelayError {
    #[cfg(feature = "hardware")]
    #[error("GPIO access failed: {0}")]
    Gpio(#[from] rppal::gpio::Error),
}

/// The driver variants selectable at startup.
#[derive(Debug)]
pub enum RelayDriver {
    #[cfg(feature = "hardware")]
    Gpio(GpioRelay),
    Noop(NoopRelay),
}

/// Select and initialize the relay driver for this run.
pub fn init(config: &RelayConfig) -> Result<RelayDriver, RelayError> {
    #[cfg(feature = "hardware")]
    {
        if config.enabled {
            let relay = GpioRelay::init(config.high_pin, config.low_pin)?;
            tracing::info!(
                high_pin = config.high_pin,
                low_pin = ?config.low_pin,
                "relay initialized"
            );
            return Ok(RelayDriver::Gpio(relay));
        }
        tracing::info!("relay disabled, bounces will be no-ops");
    }

    #[cfg(not(feature = "hardware"))]
    if config.enabled {
        tracing::warn!("hardware support not compiled in, bounces will be no-ops");
    } else {
        tracing::info!("relay disabled, bounces will be no-ops");
    }

    Ok(RelayDriver::Noop(NoopRelay))
}

impl Relay for RelayDriver {
    async fn trigger(&mut self, duration: Duration) {
        match self {
            #[cfg(feature = "hardware")]
            RelayDriver::Gpio(relay) => relay.trigger(duration).await,
            RelayDriver::Noop(relay) => relay.trigger(duration).await,
        }
    }

    fn close(self) -> Result<(), RelayError> {
        match self {
            #[cfg(feature = "hardware")]
            RelayDriver::Gpio(relay) => relay.close(),
            RelayDriver::Noop(relay) => relay.close(),
        }
    }
}
