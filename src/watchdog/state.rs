//! Run-time failure state for the check loop.

use std::time::Instant;

/// Counters owned and mutated exclusively by the check loop.
///
/// `consecutive_failures` never exceeds the configured threshold: the loop
/// resets it to zero at the moment the threshold is reached.
#[derive(Debug, Default)]
pub struct CheckState {
    /// Failed probes since the last success or bounce.
    pub consecutive_failures: u32,

    /// Failed probes for the life of the process. Monotone.
    pub total_failures: u64,

    /// When the most recent probe failure happened.
    pub last_failure: Option<Instant>,

    /// Index of the next site to probe.
    pub next_site: usize,
}

impl CheckState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A probe succeeded: the failure streak ends.
    pub fn record_success(&mut self) {
        self.consecutive_failures = 0;
    }

    /// A probe failed: bump both counters and stamp the failure time.
    pub fn record_failure(&mut self) {
        self.consecutive_failures += 1;
        self.total_failures += 1;
        self.last_failure = Some(Instant::now());
    }

    /// A bounce was triggered: the streak restarts, totals are untouched.
    pub fn reset_streak(&mut self) {
        self.consecutive_failures = 0;
    }

    /// Move to the next site, wrapping around the configured list.
    pub fn advance_site(&mut self, site_count: usize) {
        self.next_site = (self.next_site + 1) % site_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_bumps_both_counters() {
        let mut state = CheckState::new();
        state.record_failure();
        state.record_failure();
        assert_eq!(state.consecutive_failures, 2);
        assert_eq!(state.total_failures, 2);
        assert!(state.last_failure.is_some());
    }

    #[test]
    fn test_success_resets_streak_not_totals() {
        let mut state = CheckState::new();
        state.record_failure();
        state.record_failure();
        state.record_success();
        assert_eq!(state.consecutive_failures, 0);
        assert_eq!(state.total_failures, 2);
    }

    #[test]
    fn test_reset_streak_keeps_totals() {
        let mut state = CheckState::new();
        for _ in 0..5 {
            state.record_failure();
        }
        state.reset_streak();
        assert_eq!(state.consecutive_failures, 0);
        assert_eq!(state.total_failures, 5);
    }

    #[test]
    fn test_advance_site_wraps() {
        let mut state = CheckState::new();
        state.advance_site(3);
        state.advance_site(3);
        assert_eq!(state.next_site, 2);
        state.advance_site(3);
        assert_eq!(state.next_site, 0);
    }

    #[test]
    fn test_single_site_always_index_zero() {
        let mut state = CheckState::new();
        for _ in 0..10 {
            state.advance_site(1);
            assert_eq!(state.next_site, 0);
        }
    }
}
