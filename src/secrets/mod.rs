//! Secret retrieval subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     store.rs (SecretStore::fetch by secret id)
//!     → aws.rs (Secrets Manager GetSecretValue)
//!     → credentials.rs (parse JSON bundle, build ConnectionTarget)
//!     → ConnectionTarget (immutable, handed to the database probe)
//! ```
//!
//! # Design Decisions
//! - Fetched exactly once; every failure here is fatal to startup
//! - Only plain-text secrets are accepted
//! - Passwords never appear in `Debug` or `Display` output

pub mod aws;
pub mod credentials;
pub mod error;
pub mod store;

pub use aws::AwsSecretStore;
pub use credentials::{ConnectionTarget, DbSecret};
pub use error::SecretError;
pub use store::{load_connection_target, SecretPayload, SecretStore};
