//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Parse CLI → init logging → load config → init relay → run loop
//!
//! Shutdown:
//!     SIGTERM/SIGINT (signals.rs)
//!         → Shutdown::trigger (shutdown.rs)
//!         → check loop exits at iteration boundary or mid-sleep
//!         → relay closed exactly once
//! ```
//!
//! # Design Decisions
//! - Fail fast: config or relay init errors are fatal before the loop starts
//! - The loop itself has no normal-path exit; only the shutdown signal
//!   terminates it

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
