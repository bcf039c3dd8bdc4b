//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing macros (structured log events)
//!     → logging.rs (fmt subscriber on stdout)
//! ```
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured filter
//! - Passwords are never logged; targets print as host:port/database

pub mod logging;
