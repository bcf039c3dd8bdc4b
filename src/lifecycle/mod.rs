//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Fetch secret → Parse credentials → Build probe
//!
//! Run (scheduler.rs):
//!     Retry run → Sleep interval → Retry run → ... until shutdown
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Stop scheduling further runs
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Runs never overlap and never stop on failure
//! - Shutdown is observed between runs, not in the middle of one

pub mod scheduler;
pub mod shutdown;
pub mod signals;
pub mod startup;

pub use scheduler::Scheduler;
pub use shutdown::Shutdown;
pub use startup::{prepare, run_schedule};
