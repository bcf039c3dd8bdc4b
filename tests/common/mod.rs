//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU32, Ordering};

use rds_probe::secrets::{SecretError, SecretPayload, SecretStore};

pub const EXAMPLE_SECRET: &str = r#"{"username":"root","password":"password","engine":"mysql","host":"demo-1.cluster-cwgymxni8kom.eu-west-1.rds.amazonaws.com","port":3306,"dbClusterIdentifier":"demo-1"}"#;

/// In-memory secret store. Unknown ids answer `ResourceNotFound`.
#[derive(Default)]
pub struct StaticSecretStore {
    secrets: HashMap<String, SecretPayload>,
    fetches: AtomicU32,
}

impl StaticSecretStore {
    pub fn with_text(mut self, secret_id: &str, text: &str) -> Self {
        self.secrets
            .insert(secret_id.to_string(), SecretPayload::Text(text.to_string()));
        self
    }

    pub fn with_binary(mut self, secret_id: &str, bytes: &[u8]) -> Self {
        self.secrets
            .insert(secret_id.to_string(), SecretPayload::Binary(bytes.to_vec()));
        self
    }

    pub fn fetches(&self) -> u32 {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl SecretStore for StaticSecretStore {
    fn fetch(
        &self,
        secret_id: &str,
    ) -> impl Future<Output = Result<SecretPayload, SecretError>> + Send {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let result = self
            .secrets
            .get(secret_id)
            .cloned()
            .ok_or_else(|| SecretError::ResourceNotFound {
                secret_id: secret_id.to_string(),
                message: "Secrets Manager can't find the specified secret.".to_string(),
            });
        std::future::ready(result)
    }
}

/// Operation that fails for its first `failures` calls and records the
/// virtual time of every call.
pub struct ScriptedOperation {
    failures: u32,
    calls: RefCell<Vec<tokio::time::Instant>>,
}

impl ScriptedOperation {
    pub fn new(failures: u32) -> Self {
        Self {
            failures,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call(&self) -> std::future::Ready<Result<(), String>> {
        let mut calls = self.calls.borrow_mut();
        calls.push(tokio::time::Instant::now());
        let n = calls.len() as u32;
        if n <= self.failures {
            std::future::ready(Err(format!("simulated failure #{n}")))
        } else {
            std::future::ready(Ok(()))
        }
    }

    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Call times relative to `origin`, in milliseconds.
    pub fn offsets_ms(&self, origin: tokio::time::Instant) -> Vec<u128> {
        self.calls
            .borrow()
            .iter()
            .map(|t| t.duration_since(origin).as_millis())
            .collect()
    }
}
