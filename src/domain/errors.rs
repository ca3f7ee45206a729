// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures surfaced by value objects and by the article repositories.
///
/// A lookup that finds no row is not an error: repositories return `Ok(None)`
/// for that case. `NotFound` is reserved for writes that target a missing id.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{operation} failed: backend unreachable: {message}")]
    Connectivity {
        operation: &'static str,
        message: String,
    },
    #[error("{operation} failed: {message}")]
    OperationFailed {
        operation: &'static str,
        message: String,
    },
}

impl DomainError {
    pub fn operation_failed(operation: &'static str, message: impl Into<String>) -> Self {
        Self::OperationFailed {
            operation,
            message: message.into(),
        }
    }

    pub fn connectivity(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Connectivity {
            operation,
            message: message.into(),
        }
    }
}
