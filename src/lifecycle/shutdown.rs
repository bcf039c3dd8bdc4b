//! Stop signal for the probe loop.

use tokio::sync::broadcast;

/// Tells the scheduler to stop scheduling new runs.
///
/// A receiver that sees the signal should finish the run it is in (the retry
/// controller is never interrupted mid-backoff) and then return instead of
/// sleeping for the next interval. Dropping every sender has the same effect.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        // One slot: the signal is sent at most once per process.
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver for the scheduler; take it before spawning the signal task.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscribed scheduler to stop after its current run.
    /// Without subscribers this is a no-op.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
