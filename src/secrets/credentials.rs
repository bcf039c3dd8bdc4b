//! Database credential bundle and the connection target derived from it.
//!
//! The bundle is the JSON document RDS writes for managed credentials:
//!
//! ```json
//! {"username":"root","password":"password","engine":"mysql",
//!  "host":"demo-1.cluster-cwgymxni8kom.eu-west-1.rds.amazonaws.com",
//!  "port":3306,"dbClusterIdentifier":"demo-1"}
//! ```

use serde::Deserialize;
use std::fmt;

use crate::secrets::error::SecretError;

/// Parsed credential bundle.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct DbSecret {
    pub username: String,
    pub password: String,
    pub engine: String,
    pub host: String,
    pub port: u16,
    /// Absent for single-instance secrets.
    #[serde(rename = "dbClusterIdentifier", default)]
    pub db_cluster_identifier: Option<String>,
}

impl DbSecret {
    pub fn parse(text: &str) -> Result<Self, SecretError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl fmt::Debug for DbSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbSecret")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("engine", &self.engine)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("db_cluster_identifier", &self.db_cluster_identifier)
            .finish()
    }
}

/// Everything needed to open a connection. Built once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl ConnectionTarget {
    pub fn from_secret(secret: DbSecret, database: &str) -> Self {
        Self {
            host: secret.host,
            port: secret.port,
            database: database.to_string(),
            username: secret.username,
            password: secret.password,
        }
    }
}

/// `host:port/database`
impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{}", self.host, self.port, self.database)
    }
}

impl fmt::Debug for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionTarget")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
