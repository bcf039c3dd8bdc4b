//! Employee count probe.

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

use crate::database::error::DatabaseError;
use crate::secrets::ConnectionTarget;

pub const EMPLOYEE_COUNT_QUERY: &str = "select count(*) from employees";

/// MySQL connect options for `target`.
pub fn connect_options(target: &ConnectionTarget) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&target.host)
        .port(target.port)
        .username(&target.username)
        .password(&target.password)
        .database(&target.database)
}

/// Counts rows in the employees table over a fresh connection per call.
#[derive(Debug, Clone)]
pub struct EmployeeProbe {
    target: ConnectionTarget,
    connect_timeout: Option<Duration>,
}

impl EmployeeProbe {
    /// `connect_timeout` bounds connection setup only; `None` waits as long
    /// as the driver does.
    pub fn new(target: ConnectionTarget, connect_timeout: Option<Duration>) -> Self {
        Self {
            target,
            connect_timeout,
        }
    }

    pub fn target(&self) -> &ConnectionTarget {
        &self.target
    }

    pub async fn count_employees(&self) -> Result<i64, DatabaseError> {
        tracing::debug!(db = %self.target, "Connecting");

        let mut conn = self.connect().await?;
        let result = sqlx::query_scalar::<_, i64>(EMPLOYEE_COUNT_QUERY)
            .fetch_one(&mut conn)
            .await;

        let count = close_after(result, conn.close()).await?;
        tracing::info!(count, "There are {} employees in the database", count);
        Ok(count)
    }

    async fn connect(&self) -> Result<MySqlConnection, DatabaseError> {
        let options = connect_options(&self.target);
        let connected = match self.connect_timeout {
            None => options.connect().await,
            Some(deadline) => match timeout(deadline, options.connect()).await {
                Ok(connected) => connected,
                Err(_) => {
                    return Err(DatabaseError::ConnectTimeout {
                        target: self.target.to_string(),
                        timeout: deadline,
                    })
                }
            },
        };

        connected.map_err(|source| DatabaseError::Connect {
            target: self.target.to_string(),
            source,
        })
    }
}

/// Await `close` whatever the query returned, then surface the query result.
async fn close_after<T, C>(result: Result<T, sqlx::Error>, close: C) -> Result<T, DatabaseError>
where
    C: Future<Output = Result<(), sqlx::Error>>,
{
    if let Err(e) = close.await {
        tracing::warn!(error = %e, "Failed to close database connection cleanly");
    }
    result.map_err(DatabaseError::Query)
}
