//! Retry controller.
//!
//! # Responsibilities
//! - Invoke an operation once, unconditionally
//! - On failure, retry up to `max_attempts` more times with capped backoff
//! - Absorb every failure: the caller only ever sees a [`RetryOutcome`]
//!
//! The first invocation does not count against the retry budget, so a run
//! makes at most `1 + max_attempts` invocations.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use crate::config::RetryConfig;
use crate::resilience::backoff::Backoff;

/// Suspends the current task between attempts.
pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// How a single controller run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryOutcome {
    /// The operation eventually succeeded.
    Succeeded { invocations: u32 },
    /// The retry budget ran out; the last failure was dropped.
    Exhausted { invocations: u32 },
}

impl RetryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RetryOutcome::Succeeded { .. })
    }

    pub fn invocations(&self) -> u32 {
        match self {
            RetryOutcome::Succeeded { invocations } | RetryOutcome::Exhausted { invocations } => {
                *invocations
            }
        }
    }
}

/// Runs operations with a flat retry budget and capped exponential backoff.
#[derive(Debug, Clone)]
pub struct RetryController<S = TokioSleeper> {
    backoff: Backoff,
    max_attempts: u32,
    sleeper: S,
}

impl RetryController<TokioSleeper> {
    pub fn new(config: &RetryConfig) -> Self {
        Self {
            backoff: Backoff::from(config),
            max_attempts: config.max_attempts,
            sleeper: TokioSleeper,
        }
    }
}

impl Default for RetryController<TokioSleeper> {
    fn default() -> Self {
        Self::new(&RetryConfig::default())
    }
}

impl<S: Sleeper> RetryController<S> {
    /// Replace the sleeper, keeping backoff and budget.
    pub fn with_sleeper<T: Sleeper>(self, sleeper: T) -> RetryController<T> {
        RetryController {
            backoff: self.backoff,
            max_attempts: self.max_attempts,
            sleeper,
        }
    }

    /// Run `operation`, retrying on any failure until it succeeds or the
    /// budget is spent. Never returns an error.
    ///
    /// Failures are not classified: an authentication error is retried
    /// exactly like a dropped connection.
    pub async fn run_with_retry<F, Fut, T, E>(&self, mut operation: F) -> RetryOutcome
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        tracing::info!("Going to query database");
        let mut invocations = 1;
        match operation().await {
            Ok(_) => return RetryOutcome::Succeeded { invocations },
            Err(e) => tracing::warn!(error = %e, "Operation failed"),
        }

        let mut attempt = 0;
        let mut succeeded = false;
        while !succeeded && attempt < self.max_attempts {
            let wait = self.backoff.wait(attempt);
            tracing::info!(attempt, "Going to retry in {} msecs", wait.as_millis());
            self.sleeper.sleep(wait).await;

            tracing::info!(attempt, "Going to retry to query database");
            invocations += 1;
            match operation().await {
                Ok(_) => succeeded = true,
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "Retry failed");
                    attempt += 1;
                }
            }
        }

        if succeeded {
            tracing::info!(invocations, "Operation succeeded after retry");
            RetryOutcome::Succeeded { invocations }
        } else {
            tracing::error!(invocations, "Retries exhausted, giving up until next run");
            RetryOutcome::Exhausted { invocations }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingSleeper {
        waits: Arc<Mutex<Vec<Duration>>>,
    }

    impl RecordingSleeper {
        fn waits(&self) -> Vec<Duration> {
            self.waits.lock().unwrap().clone()
        }
    }

    impl Sleeper for RecordingSleeper {
        fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
            self.waits.lock().unwrap().push(duration);
            std::future::ready(())
        }
    }

    fn controller() -> (RetryController<RecordingSleeper>, RecordingSleeper) {
        let sleeper = RecordingSleeper::default();
        let controller =
            RetryController::new(&RetryConfig::default()).with_sleeper(sleeper.clone());
        (controller, sleeper)
    }

    /// Operation failing for the first `failures` calls.
    fn flaky(
        calls: &Cell<u32>,
        failures: u32,
    ) -> impl FnMut() -> std::future::Ready<Result<(), String>> + '_ {
        move || {
            let n = calls.get();
            calls.set(n + 1);
            if n < failures {
                std::future::ready(Err(format!("failure {n}")))
            } else {
                std::future::ready(Ok(()))
            }
        }
    }

    #[tokio::test]
    async fn test_success_runs_once_without_waiting() {
        let (controller, sleeper) = controller();
        let calls = Cell::new(0);

        let outcome = controller.run_with_retry(flaky(&calls, 0)).await;

        assert_eq!(outcome, RetryOutcome::Succeeded { invocations: 1 });
        assert_eq!(calls.get(), 1);
        assert!(sleeper.waits().is_empty());
    }

    #[tokio::test]
    async fn test_single_failure_waits_two_seconds() {
        let (controller, sleeper) = controller();
        let calls = Cell::new(0);

        let outcome = controller.run_with_retry(flaky(&calls, 1)).await;

        assert_eq!(outcome, RetryOutcome::Succeeded { invocations: 2 });
        assert_eq!(calls.get(), 2);
        assert_eq!(sleeper.waits(), vec![Duration::from_millis(2000)]);
    }

    #[tokio::test]
    async fn test_persistent_failure_exhausts_budget() {
        let (controller, sleeper) = controller();
        let calls = Cell::new(0);

        let outcome = controller.run_with_retry(flaky(&calls, u32::MAX)).await;

        assert_eq!(outcome, RetryOutcome::Exhausted { invocations: 4 });
        assert!(!outcome.is_success());
        assert_eq!(calls.get(), 4);
        assert_eq!(
            sleeper.waits(),
            vec![
                Duration::from_millis(2000),
                Duration::from_millis(4000),
                Duration::from_millis(8000),
            ]
        );
    }

    #[tokio::test]
    async fn test_success_on_last_retry() {
        let (controller, sleeper) = controller();
        let calls = Cell::new(0);

        let outcome = controller.run_with_retry(flaky(&calls, 3)).await;

        assert_eq!(outcome, RetryOutcome::Succeeded { invocations: 4 });
        assert_eq!(sleeper.waits().len(), 3);
    }

    #[tokio::test]
    async fn test_zero_budget_never_retries() {
        let sleeper = RecordingSleeper::default();
        let config = RetryConfig {
            max_attempts: 0,
            ..RetryConfig::default()
        };
        let controller = RetryController::new(&config).with_sleeper(sleeper.clone());
        let calls = Cell::new(0);

        let outcome = controller.run_with_retry(flaky(&calls, u32::MAX)).await;

        assert_eq!(outcome, RetryOutcome::Exhausted { invocations: 1 });
        assert!(sleeper.waits().is_empty());
    }

    #[tokio::test]
    async fn test_wait_saturates_with_larger_budget() {
        let sleeper = RecordingSleeper::default();
        let config = RetryConfig {
            max_attempts: 5,
            ..RetryConfig::default()
        };
        let controller = RetryController::new(&config).with_sleeper(sleeper.clone());
        let calls = Cell::new(0);

        controller.run_with_retry(flaky(&calls, u32::MAX)).await;

        let waits: Vec<u128> = sleeper.waits().iter().map(Duration::as_millis).collect();
        assert_eq!(waits, vec![2000, 4000, 8000, 10_000, 10_000]);
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_retry_lines_differ_from_first_call() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (controller, _) = controller();
        let calls = Cell::new(0);
        controller.run_with_retry(flaky(&calls, 1)).await;

        let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert_eq!(text.matches("Going to query database").count(), 1);
        assert_eq!(text.matches("Going to retry to query database").count(), 1);

        let first = text.find("Going to query database").unwrap();
        let wait = text.find("Going to retry in 2000 msecs").unwrap();
        let retry = text.find("Going to retry to query database").unwrap();
        assert!(first < wait && wait < retry);
    }
}
