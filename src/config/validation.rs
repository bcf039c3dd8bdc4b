//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (waits and intervals > 0, names non-empty)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProbeConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::ProbeConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("retry.base_wait_ms ({base}) exceeds retry.max_wait_ms ({max})")]
    BaseAboveCeiling { base: u64, max: u64 },
}

pub fn validate_config(config: &ProbeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let names = [
        ("secret.region", &config.secret.region),
        ("secret.secret_id", &config.secret.secret_id),
        ("database.name", &config.database.name),
    ];
    for (field, value) in names {
        if value.trim().is_empty() {
            errors.push(ValidationError::Empty { field });
        }
    }

    let amounts = [
        ("retry.base_wait_ms", config.retry.base_wait_ms),
        ("retry.max_wait_ms", config.retry.max_wait_ms),
        ("schedule.interval_ms", config.schedule.interval_ms),
    ];
    for (field, value) in amounts {
        if value == 0 {
            errors.push(ValidationError::Zero { field });
        }
    }

    if config.database.connect_timeout_secs == Some(0) {
        errors.push(ValidationError::Zero {
            field: "database.connect_timeout_secs",
        });
    }

    if config.retry.base_wait_ms > config.retry.max_wait_ms {
        errors.push(ValidationError::BaseAboveCeiling {
            base: config.retry.base_wait_ms,
            max: config.retry.max_wait_ms,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
