//! Fixed-interval outer loop.

use std::future::Future;
use std::time::Duration;
use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::resilience::RetryOutcome;

/// Invokes a job, waits a fixed interval, and repeats until shutdown.
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    interval: Duration,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Run `job` back to back with `interval` between the end of one run and
    /// the start of the next. Returns the number of completed runs once
    /// `shutdown` fires or its sender is gone.
    pub async fn run<F, Fut>(&self, mut job: F, mut shutdown: broadcast::Receiver<()>) -> u64
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = RetryOutcome>,
    {
        let mut runs = 0;

        loop {
            match shutdown.try_recv() {
                Err(TryRecvError::Empty) => {}
                _ => break,
            }

            let outcome = job().await;
            runs += 1;
            tracing::debug!(run = runs, ?outcome, "Scheduled run finished");

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = shutdown.recv() => break,
            }
        }

        tracing::info!(runs, "Scheduler stopped");
        runs
    }
}
