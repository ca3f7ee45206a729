use crate::domain::errors::DomainError;

/// SQLSTATE classes that mean the backend rejected the connection itself
/// rather than the statement.
const CONNECTION_EXCEPTION_CLASS: &str = "08";
const INVALID_AUTHORIZATION: &str = "28000";
const INVALID_PASSWORD: &str = "28P01";

/// Wrap a backend error for `operation`. The original error is logged and
/// otherwise only used to tell connectivity problems apart from everything else.
pub fn map_sqlx(operation: &'static str, err: sqlx::Error) -> DomainError {
    tracing::error!(operation, error = %err, "backend error");

    match &err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => DomainError::connectivity(operation, err.to_string()),
        sqlx::Error::Database(db_err) => {
            let rejected_connection = db_err.code().is_some_and(|code| {
                code.starts_with(CONNECTION_EXCEPTION_CLASS)
                    || code == INVALID_AUTHORIZATION
                    || code == INVALID_PASSWORD
            });
            if rejected_connection {
                DomainError::connectivity(operation, db_err.message())
            } else {
                DomainError::operation_failed(operation, db_err.message())
            }
        }
        _ => DomainError::operation_failed(operation, err.to_string()),
    }
}
