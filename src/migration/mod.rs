//! One-shot schema migration: connectivity probe, statement splitting and
//! sequential execution that skips statements whose objects already exist.

pub mod classify;
pub mod runner;
pub mod splitter;
pub mod target;

pub use classify::{ErrorClass, classify};
pub use runner::{
    DEFAULT_MIGRATION_FILE, MigrationError, MigrationMode, MigrationReport, MigrationRunner,
    RunState,
};
pub use splitter::split_statements;
pub use target::{BackendError, MigrationTarget};
