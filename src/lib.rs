//! bouncer — a connectivity watchdog.
//!
//! Probes one or more sites over HTTP(S); after enough consecutive failures
//! it pulses a relay output to power-cycle an attached device (typically a
//! router or modem), then cools down before resuming normal checks.
//!
//! # Architecture Overview
//!
//! ```text
//!               ┌──────────────────────────────────────────────┐
//!               │                  WATCHDOG                     │
//!               │                                               │
//!               │  ┌─────────┐   probe    ┌─────────────────┐  │
//!               │  │watchdog │───────────▶│      probe       │──┼──▶ sites
//!               │  │  loop   │◀───────────│ DNS→TCP→TLS→GET  │  │   (http/s)
//!               │  └────┬────┘  ok / err  └─────────────────┘  │
//!               │       │                                       │
//!               │       │ threshold reached                     │
//!               │       ▼                                       │
//!               │  ┌─────────┐            ┌─────────────────┐  │
//!               │  │  relay  │───────────▶│  GPIO pins or    │  │
//!               │  │ driver  │   pulse    │  no-op           │  │
//!               │  └─────────┘            └─────────────────┘  │
//!               │                                               │
//!               │  ┌─────────────────────────────────────────┐ │
//!               │  │          Cross-Cutting Concerns          │ │
//!               │  │  config · observability · lifecycle ·    │ │
//!               │  │  timing (jitter)                         │ │
//!               │  └─────────────────────────────────────────┘ │
//!               └──────────────────────────────────────────────┘
//! ```
//!
//! The loop is one logical task; probes are bounded by a hard deadline, the
//! relay pulse is held inline, and sleeps are jittered so checks never fall
//! into a synchronized pattern.

// Core subsystems
pub mod config;
pub mod probe;
pub mod relay;
pub mod watchdog;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod timing;

pub use config::BouncerConfig;
pub use lifecycle::Shutdown;
pub use watchdog::Watchdog;
