//! The check loop.
//!
//! One logical task owns everything here: site selection, probing, failure
//! accounting, bounce decisions, and sleep scheduling. Nothing else observes
//! or mutates [`CheckState`], so there is no locking.

use std::time::{Duration, Instant};

use tokio::sync::broadcast;
use tokio::time;
use url::Url;

use crate::config::CheckConfig;
use crate::observability::metrics;
use crate::probe::Probe;
use crate::relay::Relay;
use crate::timing::Jitter;
use crate::watchdog::state::CheckState;

/// Timing and threshold policy for the loop, resolved to durations once.
#[derive(Debug, Clone)]
pub struct CheckPolicy {
    pub check_interval: Duration,
    pub check_jitter: Duration,
    pub check_timeout: Duration,
    pub retry_interval: Duration,
    pub retry_jitter: Duration,
    pub failures: u32,
    pub bounce_duration: Duration,
    pub bounce_timeout: Duration,
}

impl From<&CheckConfig> for CheckPolicy {
    fn from(config: &CheckConfig) -> Self {
        Self {
            check_interval: config.check_interval(),
            check_jitter: config.check_jitter(),
            check_timeout: config.check_timeout(),
            retry_interval: config.retry_interval(),
            retry_jitter: config.retry_jitter(),
            failures: config.failures,
            bounce_duration: config.bounce_duration(),
            bounce_timeout: config.bounce_timeout(),
        }
    }
}

/// The connectivity watchdog state machine.
///
/// Generic over the probe and relay capabilities so tests can inject
/// scripted outcomes and a recording actuator.
#[derive(Debug)]
pub struct Watchdog<P, R> {
    sites: Vec<Url>,
    policy: CheckPolicy,
    probe: P,
    relay: R,
    jitter: Jitter,
    state: CheckState,
}

impl<P: Probe, R: Relay> Watchdog<P, R> {
    /// Build the loop around already-validated settings.
    ///
    /// # Panics
    ///
    /// Panics if `sites` is empty; config validation rejects that before
    /// construction.
    pub fn new(sites: Vec<Url>, policy: CheckPolicy, probe: P, relay: R, jitter: Jitter) -> Self {
        assert!(!sites.is_empty(), "watchdog requires at least one site");
        Self {
            sites,
            policy,
            probe,
            relay,
            jitter,
            state: CheckState::new(),
        }
    }

    /// The loop's run-time counters.
    pub fn state(&self) -> &CheckState {
        &self.state
    }

    /// The injected probe.
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Run one iteration: probe the current site, update counters, bounce if
    /// the threshold is reached, advance the rotation. Returns how long to
    /// sleep before the next iteration.
    pub async fn step(&mut self) -> Duration {
        let site = self.sites[self.state.next_site].clone();
        let started = Instant::now();
        let result = self.probe.check(&site, self.policy.check_timeout).await;
        metrics::record_check(site.as_str(), result.is_ok());

        let delay = match result {
            Ok(()) => {
                tracing::debug!(
                    site = %site,
                    elapsed = ?started.elapsed(),
                    total_failures = self.state.total_failures,
                    "check succeeded"
                );
                self.state.record_success();
                self.jitter
                    .around(self.policy.check_interval, self.policy.check_jitter)
            }
            Err(err) => {
                self.state.record_failure();
                tracing::error!(
                    site = %site,
                    error = %err,
                    elapsed = ?started.elapsed(),
                    consecutive_failures = self.state.consecutive_failures,
                    total_failures = self.state.total_failures,
                    "check failed"
                );
                if self.state.consecutive_failures >= self.policy.failures {
                    tracing::warn!(
                        duration = ?self.policy.bounce_duration,
                        total_failures = self.state.total_failures,
                        "failure threshold reached, bouncing relay"
                    );
                    // Holds the loop for the whole pulse; no probing while
                    // the monitored device power-cycles.
                    self.relay.trigger(self.policy.bounce_duration).await;
                    metrics::record_bounce();
                    self.state.reset_streak();
                    // Cooldown is deliberately unjittered.
                    self.policy.bounce_timeout
                } else {
                    self.jitter
                        .around(self.policy.retry_interval, self.policy.retry_jitter)
                }
            }
        };
        metrics::record_consecutive_failures(self.state.consecutive_failures);

        self.state.advance_site(self.sites.len());
        delay
    }

    /// Run until `shutdown` fires. Returns the relay so the caller can
    /// release it.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) -> R {
        tracing::info!(
            sites = self.sites.len(),
            failure_threshold = self.policy.failures,
            "watchdog starting"
        );
        loop {
            let delay = tokio::select! {
                delay = self.step() => delay,
                _ = shutdown.recv() => break,
            };
            tracing::debug!(?delay, "sleeping until next check");
            tokio::select! {
                _ = time::sleep(delay) => {}
                _ = shutdown.recv() => break,
            }
        }
        tracing::info!(
            total_failures = self.state.total_failures,
            "watchdog stopped"
        );
        self.relay
    }
}
