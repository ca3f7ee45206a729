use async_trait::async_trait;
use thiserror::Error;

/// Error reported by the backend for a single request, reduced to what the
/// runner needs for classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BackendError {
    /// SQLSTATE when the backend supplied one.
    pub code: Option<String>,
    pub message: String,
}

impl BackendError {
    pub fn new(code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Some(code.into()), message)
    }

    pub fn message_only(message: impl Into<String>) -> Self {
        Self::new(None, message)
    }
}

/// Where migration statements are sent. Calls are made strictly one at a time.
#[async_trait]
pub trait MigrationTarget: Send + Sync {
    /// Cheap read against the `_migrations` bookkeeping table.
    async fn probe(&self) -> Result<(), BackendError>;

    /// Run one statement.
    async fn execute(&self, statement: &str) -> Result<(), BackendError>;

    /// Run a whole script as a single multi-statement batch.
    async fn execute_batch(&self, script: &str) -> Result<(), BackendError>;
}
