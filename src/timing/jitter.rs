//! Bounded random offsets for check scheduling.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of bounded random scheduling offsets.
///
/// Owns its generator so callers can seed it for a deterministic schedule.
#[derive(Debug)]
pub struct Jitter {
    rng: StdRng,
}

impl Jitter {
    /// Create a jitter source seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a jitter source with a fixed seed, producing a reproducible
    /// offset sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform offset in `[-bound, +bound]`, in nanoseconds.
    fn offset_nanos(&mut self, bound: Duration) -> i64 {
        let b = bound.as_nanos() as i64;
        if b == 0 {
            return 0;
        }
        self.rng.gen_range(-b..=b)
    }

    /// A duration uniformly distributed over `[base - bound, base + bound]`,
    /// clamped at zero. Nanosecond precision: a bound of 1500ms really skews
    /// by fractional seconds, not whole ones.
    pub fn around(&mut self, base: Duration, bound: Duration) -> Duration {
        let offset = self.offset_nanos(bound);
        if offset >= 0 {
            base + Duration::from_nanos(offset as u64)
        } else {
            base.saturating_sub(Duration::from_nanos(offset.unsigned_abs()))
        }
    }
}

impl Default for Jitter {
    fn default() -> Self {
        Self::new()
    }
}
