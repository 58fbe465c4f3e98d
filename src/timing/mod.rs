//! Check scheduling helpers.
//!
//! # Design Decisions
//! - Jitter comes from an owned generator instance, not a process-global RNG
//! - Sub-second precision is preserved end to end
//! - The bounce cooldown is deliberately unjittered; only regular check and
//!   retry sleeps go through [`Jitter`]

pub mod jitter;

pub use jitter::Jitter;
