//! Configuration schema definitions.
//!
//! Defaults reproduce the probe's fixed deployment: secret `demo-aurora` in
//! `eu-west-1`, database `employees`, three retries capped at ten seconds,
//! one run every two seconds.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the probe.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProbeConfig {
    /// Where the database credentials live.
    pub secret: SecretConfig,

    /// Database connection settings not carried by the secret.
    pub database: DatabaseConfig,

    /// Retry and backoff settings for a single run.
    pub retry: RetryConfig,

    /// Outer loop settings.
    pub schedule: ScheduleConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Secret store configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct SecretConfig {
    /// AWS region hosting the secret.
    pub region: String,

    /// Name or ARN of the secret.
    pub secret_id: String,
}

impl Default for SecretConfig {
    fn default() -> Self {
        Self {
            region: "eu-west-1".to_string(),
            secret_id: "demo-aurora".to_string(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Schema to connect to.
    pub name: String,

    /// Upper bound on establishing a connection. Unset means no deadline.
    pub connect_timeout_secs: Option<u64>,
}

impl DatabaseConfig {
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: "employees".to_string(),
            connect_timeout_secs: None,
        }
    }
}

/// Retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct RetryConfig {
    /// Retries allowed after the first failed invocation.
    pub max_attempts: u32,

    /// Unit of the exponential backoff in milliseconds.
    pub base_wait_ms: u64,

    /// Ceiling for a single backoff wait in milliseconds.
    pub max_wait_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_wait_ms: 1000,
            max_wait_ms: 10_000,
        }
    }
}

/// Scheduler configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Pause between the end of one run and the start of the next.
    pub interval_ms: u64,
}

impl ScheduleConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self { interval_ms: 2000 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "rds_probe=info".to_string(),
        }
    }
}
