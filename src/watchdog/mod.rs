//! The watchdog core.
//!
//! # Data Flow
//! ```text
//! monitor.rs (one logical task, forever):
//!     select site (round-robin)
//!     → probe with check_timeout
//!     → success: streak = 0, sleep check_interval ± check_jitter
//!     → failure: counters++, and either
//!         - streak >= threshold: pulse relay, streak = 0,
//!           sleep bounce_timeout (unjittered)
//!         - else: sleep retry_interval ± retry_jitter
//!     → advance site, sleep, repeat
//! ```
//!
//! # Design Decisions
//! - Round-robin across sites so one flaky target cannot bounce the relay
//!   by itself, while a fully-down link still drives the streak up
//! - Every probe failure kind is the same failure; causes go to diagnostics
//! - State lives here and nowhere else; there is exactly one mutator

pub mod monitor;
pub mod state;

pub use monitor::{CheckPolicy, Watchdog};
pub use state::CheckState;
