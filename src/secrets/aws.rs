//! AWS Secrets Manager backed store.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::error::{DisplayErrorContext, SdkError};
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use aws_sdk_secretsmanager::Client;

use crate::secrets::error::SecretError;
use crate::secrets::store::{SecretPayload, SecretStore};

/// Secrets Manager client bound to one region.
#[derive(Clone, Debug)]
pub struct AwsSecretStore {
    client: Client,
}

impl AwsSecretStore {
    /// Build a client from the default credential chain for `region`.
    pub async fn new(region: &str) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        tracing::debug!(region, "Secrets Manager client created");
        Self {
            client: Client::new(&sdk_config),
        }
    }
}

impl SecretStore for AwsSecretStore {
    async fn fetch(&self, secret_id: &str) -> Result<SecretPayload, SecretError> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| {
                let err = classify(secret_id, e);
                tracing::error!(secret_id, error = %err, "GetSecretValue failed");
                err
            })?;

        if let Some(text) = output.secret_string() {
            return Ok(SecretPayload::Text(text.to_string()));
        }

        let bytes = output
            .secret_binary()
            .map(|blob| blob.as_ref().to_vec())
            .unwrap_or_default();
        Ok(SecretPayload::Binary(bytes))
    }
}

fn classify(secret_id: &str, err: SdkError<GetSecretValueError>) -> SecretError {
    match err {
        SdkError::ServiceError(context) => classify_service(secret_id, context.into_err()),
        other => SecretError::Transport {
            secret_id: secret_id.to_string(),
            message: DisplayErrorContext(&other).to_string(),
        },
    }
}

fn classify_service(secret_id: &str, service_err: GetSecretValueError) -> SecretError {
    let secret_id = secret_id.to_string();
    let message = service_err.to_string();
    match service_err {
        GetSecretValueError::DecryptionFailure(_) => {
            SecretError::DecryptionFailure { secret_id, message }
        }
        GetSecretValueError::InternalServiceError(_) => {
            SecretError::InternalServiceError { secret_id, message }
        }
        GetSecretValueError::InvalidParameterException(_) => {
            SecretError::InvalidParameter { secret_id, message }
        }
        GetSecretValueError::InvalidRequestException(_) => {
            SecretError::InvalidRequest { secret_id, message }
        }
        GetSecretValueError::ResourceNotFoundException(_) => {
            SecretError::ResourceNotFound { secret_id, message }
        }
        other => SecretError::Transport {
            secret_id,
            message: DisplayErrorContext(&other).to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_secretsmanager::types::error::{
        DecryptionFailure, InvalidRequestException, ResourceNotFoundException,
    };

    #[test]
    fn test_service_errors_keep_their_kind() {
        let err = classify_service(
            "demo-aurora",
            GetSecretValueError::ResourceNotFoundException(
                ResourceNotFoundException::builder().message("gone").build(),
            ),
        );
        assert!(matches!(
            err,
            SecretError::ResourceNotFound { ref secret_id, .. } if secret_id == "demo-aurora"
        ));

        let err = classify_service(
            "demo-aurora",
            GetSecretValueError::DecryptionFailure(DecryptionFailure::builder().build()),
        );
        assert!(matches!(err, SecretError::DecryptionFailure { .. }));

        let err = classify_service(
            "demo-aurora",
            GetSecretValueError::InvalidRequestException(
                InvalidRequestException::builder().message("deleted").build(),
            ),
        );
        assert!(matches!(err, SecretError::InvalidRequest { .. }));
        assert!(err.to_string().contains("demo-aurora"));
    }
}
