//! Probe attempt errors.

use std::time::Duration;
use thiserror::Error;

/// Failures of a single probe attempt.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connection to {target} failed: {source}")]
    Connect {
        target: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Connection to {target} timed out after {timeout:?}")]
    ConnectTimeout { target: String, timeout: Duration },

    #[error("Query failed: {0}")]
    Query(#[source] sqlx::Error),
}
