//! Secret-driven database probe library.

pub mod config;
pub mod database;
pub mod lifecycle;
pub mod observability;
pub mod resilience;
pub mod secrets;

pub use config::ProbeConfig;
pub use database::EmployeeProbe;
pub use lifecycle::Shutdown;
pub use resilience::{RetryController, RetryOutcome};
