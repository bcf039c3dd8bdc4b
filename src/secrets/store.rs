//! Secret store seam.

use std::future::Future;

use crate::secrets::credentials::{ConnectionTarget, DbSecret};
use crate::secrets::error::SecretError;

/// Raw value held by a secret.
#[derive(Clone, PartialEq, Eq)]
pub enum SecretPayload {
    Text(String),
    Binary(Vec<u8>),
}

impl std::fmt::Debug for SecretPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretPayload::Text(text) => write!(f, "Text(<{} bytes>)", text.len()),
            SecretPayload::Binary(bytes) => write!(f, "Binary(<{} bytes>)", bytes.len()),
        }
    }
}

/// A service holding credential bundles by name.
pub trait SecretStore {
    fn fetch(
        &self,
        secret_id: &str,
    ) -> impl Future<Output = Result<SecretPayload, SecretError>> + Send;
}

/// Fetch `secret_id`, parse it and build the target for `database`.
///
/// Binary and malformed secrets are rejected here, before anything tries to
/// connect.
pub async fn load_connection_target<S: SecretStore>(
    store: &S,
    secret_id: &str,
    database: &str,
) -> Result<ConnectionTarget, SecretError> {
    let text = match store.fetch(secret_id).await? {
        SecretPayload::Text(text) => text,
        SecretPayload::Binary(_) => {
            return Err(SecretError::NotPlainText {
                secret_id: secret_id.to_string(),
            })
        }
    };

    let secret = DbSecret::parse(&text)?;
    tracing::debug!(
        secret_id,
        engine = %secret.engine,
        cluster = secret.db_cluster_identifier.as_deref().unwrap_or("-"),
        "Database secret parsed"
    );

    Ok(ConnectionTarget::from_secret(secret, database))
}
