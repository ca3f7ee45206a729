use super::{
    classify::{ErrorClass, classify},
    splitter::split_statements,
    target::{BackendError, MigrationTarget},
};
use crate::config::ConfigError;
use std::{fmt, path::PathBuf};
use thiserror::Error;

pub const DEFAULT_MIGRATION_FILE: &str = "migrations/20250620184438_blog_articles.sql";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Init,
    Connecting,
    Connected,
    Executing,
    Done,
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Init => "INIT",
            RunState::Connecting => "CONNECTING",
            RunState::Connected => "CONNECTED",
            RunState::Executing => "EXECUTING",
            RunState::Done => "DONE",
            RunState::Failed => "FAILED",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MigrationMode {
    /// Split the script and send statements one by one.
    #[default]
    Statements,
    /// Send the whole script as one batch.
    Batch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub mode: MigrationMode,
    pub total: usize,
    pub executed: usize,
    pub skipped: usize,
    /// Batch mode only: the batch was rejected because its objects already exist.
    pub already_migrated: bool,
}

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error("backend connection failed: {0}")]
    Connectivity(String),

    #[error("cannot read migration file {path}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("statement {index} of {total} failed: {error}")]
    Statement {
        index: usize,
        total: usize,
        statement: String,
        #[source]
        error: BackendError,
    },

    #[error("migration batch failed: {0}")]
    Batch(#[source] BackendError),
}

impl From<sqlx::Error> for MigrationError {
    fn from(err: sqlx::Error) -> Self {
        MigrationError::Connectivity(err.to_string())
    }
}

/// One-shot migration process. Statements already applied stay applied when a
/// later one fails; nothing is rolled back.
pub struct MigrationRunner<T> {
    target: T,
    source: PathBuf,
    mode: MigrationMode,
    state: RunState,
}

impl<T: MigrationTarget> MigrationRunner<T> {
    pub fn new(target: T, source: impl Into<PathBuf>, mode: MigrationMode) -> Self {
        Self {
            target,
            source: source.into(),
            mode,
            state: RunState::Init,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub async fn run(&mut self) -> Result<MigrationReport, MigrationError> {
        match self.drive().await {
            Ok(report) => {
                self.transition(RunState::Done);
                tracing::info!(
                    total = report.total,
                    executed = report.executed,
                    skipped = report.skipped,
                    already_migrated = report.already_migrated,
                    "migration complete"
                );
                Ok(report)
            }
            Err(err) => {
                self.transition(RunState::Failed);
                tracing::error!(error = %err, "migration failed");
                Err(err)
            }
        }
    }

    async fn drive(&mut self) -> Result<MigrationReport, MigrationError> {
        self.transition(RunState::Connecting);
        self.check_connectivity().await?;
        self.transition(RunState::Connected);

        let script = tokio::fs::read_to_string(&self.source)
            .await
            .map_err(|source| MigrationError::Source {
                path: self.source.clone(),
                source,
            })?;
        let statements = split_statements(&script);
        tracing::info!(
            path = %self.source.display(),
            statements = statements.len(),
            "migration file loaded"
        );

        self.transition(RunState::Executing);
        match self.mode {
            MigrationMode::Statements => self.execute_statements(&statements).await,
            MigrationMode::Batch => self.execute_batch(&script, statements.len()).await,
        }
    }

    async fn check_connectivity(&self) -> Result<(), MigrationError> {
        match self.target.probe().await {
            Ok(()) => Ok(()),
            Err(err) if classify(&err) == ErrorClass::UndefinedTable => {
                tracing::info!("bookkeeping table not present yet; backend reachable");
                Ok(())
            }
            Err(err) => Err(MigrationError::Connectivity(err.to_string())),
        }
    }

    async fn execute_statements(
        &self,
        statements: &[String],
    ) -> Result<MigrationReport, MigrationError> {
        let total = statements.len();
        let mut executed = 0;
        let mut skipped = 0;

        for (offset, statement) in statements.iter().enumerate() {
            let index = offset + 1;
            match self.target.execute(statement).await {
                Ok(()) => {
                    executed += 1;
                    tracing::debug!(index, total, "statement applied");
                }
                Err(err) if classify(&err) == ErrorClass::AlreadyApplied => {
                    skipped += 1;
                    tracing::warn!(index, total, error = %err, "statement already applied; skipping");
                }
                Err(error) => {
                    return Err(MigrationError::Statement {
                        index,
                        total,
                        statement: statement.clone(),
                        error,
                    });
                }
            }
        }

        Ok(MigrationReport {
            mode: MigrationMode::Statements,
            total,
            executed,
            skipped,
            already_migrated: false,
        })
    }

    async fn execute_batch(
        &self,
        script: &str,
        total: usize,
    ) -> Result<MigrationReport, MigrationError> {
        match self.target.execute_batch(script).await {
            Ok(()) => Ok(MigrationReport {
                mode: MigrationMode::Batch,
                total,
                executed: total,
                skipped: 0,
                already_migrated: false,
            }),
            Err(err) if classify(&err) == ErrorClass::AlreadyApplied => {
                tracing::info!(error = %err, "schema already present; database is up to date");
                Ok(MigrationReport {
                    mode: MigrationMode::Batch,
                    total,
                    executed: 0,
                    skipped: total,
                    already_migrated: true,
                })
            }
            Err(err) => Err(MigrationError::Batch(err)),
        }
    }

    fn transition(&mut self, next: RunState) {
        tracing::debug!(from = %self.state, to = %next, "migration state");
        self.state = next;
    }
}
