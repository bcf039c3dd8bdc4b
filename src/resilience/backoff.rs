//! Capped exponential backoff.

use std::time::Duration;

use crate::config::RetryConfig;

/// Wait before retry number `attempt` (zero-based) in milliseconds.
///
/// `min(2^(attempt + 1) * base_ms, max_ms)`, saturating instead of
/// overflowing for large attempts.
pub fn wait_ms(attempt: u32, base_ms: u64, max_ms: u64) -> u64 {
    let factor = 2u64.saturating_pow(attempt.saturating_add(1));
    base_ms.saturating_mul(factor).min(max_ms)
}

/// Backoff parameters for one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    pub base_ms: u64,
    pub max_ms: u64,
}

impl Backoff {
    pub fn new(base_ms: u64, max_ms: u64) -> Self {
        Self { base_ms, max_ms }
    }

    pub fn wait(&self, attempt: u32) -> Duration {
        Duration::from_millis(wait_ms(attempt, self.base_ms, self.max_ms))
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for Backoff {
    fn from(config: &RetryConfig) -> Self {
        Self::new(config.base_wait_ms, config.max_wait_ms)
    }
}
