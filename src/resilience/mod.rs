//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Scheduled run:
//!     → retry.rs (invoke operation, on failure wait and try again)
//!     → backoff.rs (wait grows with the retry index, capped)
//!     → Sleeper (tokio timer in production, recorded in tests)
//! ```
//!
//! # Design Decisions
//! - Every failure is retryable; the error value is only logged
//! - Retries are bounded by a flat count, exhaustion is not an error
//! - No jitter: waits are fully determined by the retry index

pub mod backoff;
pub mod retry;

pub use backoff::Backoff;
pub use retry::{RetryController, RetryOutcome, Sleeper, TokioSleeper};
