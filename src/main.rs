//! RDS probe.
//!
//! Reads database credentials from AWS Secrets Manager once, then counts the
//! rows of the `employees` table every couple of seconds, retrying failed
//! runs with capped exponential backoff.
//!
//! # Architecture Overview
//!
//! ```text
//!   startup                          loop (until SIGINT/SIGTERM)
//!   ┌──────────┐   ┌─────────────┐   ┌───────────┐   ┌──────────────────┐
//!   │ secrets  │──▶│ Connection  │──▶│ scheduler │──▶│ retry controller │
//!   │ (AWS SM) │   │   Target    │   │ (2s tick) │   │ (2s/4s/8s, ≤10s) │
//!   └──────────┘   └─────────────┘   └───────────┘   └────────┬─────────┘
//!                                                             │
//!                                                             ▼
//!                                                    ┌──────────────────┐
//!                                                    │ database probe   │──▶ MySQL
//!                                                    │ count(employees) │
//!                                                    └──────────────────┘
//! ```

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use rds_probe::config::{load_config, ProbeConfig};
use rds_probe::lifecycle::{self, signals, Shutdown};
use rds_probe::observability::logging;
use rds_probe::secrets::AwsSecretStore;

#[derive(Parser)]
#[command(name = "rds-probe")]
#[command(about = "Periodically count employees in an RDS database using Secrets Manager credentials", long_about = None)]
struct Cli {
    /// Optional TOML configuration file; built-in defaults apply without it.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProbeConfig::default(),
    };

    logging::init(&config.observability.log_filter);
    tracing::info!("rds-probe v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        region = %config.secret.region,
        secret_id = %config.secret.secret_id,
        database = %config.database.name,
        max_attempts = config.retry.max_attempts,
        interval_ms = config.schedule.interval_ms,
        "Configuration loaded"
    );

    let started = Instant::now();

    let store = AwsSecretStore::new(&config.secret.region).await;
    let probe = lifecycle::prepare(&store, &config).await?;

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    tokio::spawn(signals::forward_signals(shutdown));

    lifecycle::run_schedule(&config, || probe.count_employees(), shutdown_rx).await;

    let elapsed_ms = started.elapsed().as_millis();
    tracing::info!("Execution time {} ms", elapsed_ms);
    Ok(())
}
