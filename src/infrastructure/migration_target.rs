use crate::migration::{BackendError, MigrationTarget};
use async_trait::async_trait;
use sqlx::PgPool;

/// Sends migration SQL over the simple query protocol, so DDL and
/// multi-statement batches run as written.
#[derive(Clone)]
pub struct PostgresMigrationTarget {
    pool: PgPool,
}

impl PostgresMigrationTarget {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn backend_error(err: sqlx::Error) -> BackendError {
    match &err {
        sqlx::Error::Database(db_err) => BackendError::new(
            db_err.code().map(|code| code.into_owned()),
            db_err.message(),
        ),
        _ => BackendError::message_only(err.to_string()),
    }
}

#[async_trait]
impl MigrationTarget for PostgresMigrationTarget {
    async fn probe(&self) -> Result<(), BackendError> {
        sqlx::query("SELECT 1 FROM _migrations LIMIT 1")
            .fetch_optional(&self.pool)
            .await
            .map(|_| ())
            .map_err(backend_error)
    }

    async fn execute(&self, statement: &str) -> Result<(), BackendError> {
        sqlx::raw_sql(statement)
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(backend_error)
    }

    async fn execute_batch(&self, script: &str) -> Result<(), BackendError> {
        sqlx::raw_sql(script)
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(backend_error)
    }
}
