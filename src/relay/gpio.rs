//! Hardware-backed relay on Raspberry Pi GPIO.

use std::time::Duration;

use rppal::gpio::{Gpio, OutputPin};
use tokio::time;

use crate::relay::{Relay, RelayError};

/// Relay wired to BCM pins: `high` is pulsed for a bounce, `low` (when
/// configured) provides a steady ground reference.
#[derive(Debug)]
pub struct GpioRelay {
    high: OutputPin,
    low: Option<OutputPin>,
}

impl GpioRelay {
    /// Acquire the pins and drive them low.
    pub fn init(high_pin: u8, low_pin: Option<u8>) -> Result<Self, RelayError> {
        let gpio = Gpio::new()?;

        let mut high = gpio.get(high_pin)?.into_output();
        high.set_low();

        let low = match low_pin {
            Some(pin) => {
                let mut low = gpio.get(pin)?.into_output();
                low.set_low();
                Some(low)
            }
            None => None,
        };

        Ok(Self { high, low })
    }
}

impl Relay for GpioRelay {
    async fn trigger(&mut self, duration: Duration) {
        self.high.set_high();
        time::sleep(duration).await;
        self.high.set_low();
    }

    fn close(mut self) -> Result<(), RelayError> {
        self.high.set_low();
        if let Some(low) = self.low.as_mut() {
            low.set_low();
        }
        Ok(())
    }
}
