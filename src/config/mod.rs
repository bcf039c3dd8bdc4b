//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ProbeConfig (validated, immutable)
//!     → passed by reference to every subsystem
//! ```
//!
//! # Design Decisions
//! - Config is built once at startup and never changes afterwards
//! - All fields have defaults; an empty file equals running without one
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::DatabaseConfig;
pub use schema::ObservabilityConfig;
pub use schema::ProbeConfig;
pub use schema::RetryConfig;
pub use schema::ScheduleConfig;
pub use schema::SecretConfig;
