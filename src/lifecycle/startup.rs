//! Startup orchestration.
//!
//! # Responsibilities
//! - Fetch and parse the database secret, once
//! - Build the probe from the resulting connection target
//! - Wire the retry controller into the scheduler
//!
//! # Design Decisions
//! - Fail fast: a secret error aborts before the first run
//! - The loop itself never fails; it only stops on shutdown

use std::fmt::Display;
use std::future::Future;
use tokio::sync::broadcast;

use crate::config::ProbeConfig;
use crate::database::EmployeeProbe;
use crate::lifecycle::scheduler::Scheduler;
use crate::resilience::RetryController;
use crate::secrets::{load_connection_target, SecretError, SecretStore};

/// Resolve credentials from `store` and build the probe.
pub async fn prepare<S: SecretStore>(
    store: &S,
    config: &ProbeConfig,
) -> Result<EmployeeProbe, SecretError> {
    let secret_id = &config.secret.secret_id;
    let target = load_connection_target(store, secret_id, &config.database.name).await?;

    tracing::info!(
        secret_id = %secret_id,
        host = %target.host,
        "Executing against database"
    );

    Ok(EmployeeProbe::new(target, config.database.connect_timeout()))
}

/// Run `operation` under the configured retry policy on the configured
/// interval until `shutdown` fires. Returns the number of completed runs.
pub async fn run_schedule<F, Fut, T, E>(
    config: &ProbeConfig,
    operation: F,
    shutdown: broadcast::Receiver<()>,
) -> u64
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let controller = RetryController::new(&config.retry);
    let scheduler = Scheduler::new(config.schedule.interval());

    scheduler
        .run(|| controller.run_with_retry(&operation), shutdown)
        .await
}
