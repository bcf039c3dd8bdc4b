//! Secret retrieval errors.

use thiserror::Error;

/// Errors that can occur while fetching or parsing the credential bundle.
#[derive(Debug, Error)]
pub enum SecretError {
    /// The secret could not be decrypted with its KMS key.
    #[error("Decryption failure for secret '{secret_id}': {message}")]
    DecryptionFailure { secret_id: String, message: String },

    /// The secret store failed on its side.
    #[error("Secret store internal error for '{secret_id}': {message}")]
    InternalServiceError { secret_id: String, message: String },

    /// A request parameter was invalid.
    #[error("Invalid parameter for secret '{secret_id}': {message}")]
    InvalidParameter { secret_id: String, message: String },

    /// The request is invalid for the current state of the secret.
    #[error("Invalid request for secret '{secret_id}': {message}")]
    InvalidRequest { secret_id: String, message: String },

    /// No secret with this identifier exists.
    #[error("Secret '{secret_id}' not found: {message}")]
    ResourceNotFound { secret_id: String, message: String },

    /// Credentials, networking or any other SDK-level failure.
    #[error("Secret store request for '{secret_id}' failed: {message}")]
    Transport { secret_id: String, message: String },

    /// The secret only carries a binary value.
    #[error("Secret '{secret_id}' must be plain text")]
    NotPlainText { secret_id: String },

    /// The secret text is not the expected JSON document.
    #[error("Malformed database secret: {0}")]
    Malformed(#[from] serde_json::Error),
}
