// tests/support/mocks/migration_target.rs
use async_trait::async_trait;
use mealplan_blog::migration::{BackendError, MigrationTarget};
use std::collections::HashMap;
use std::sync::Mutex;

/// Records every request and answers with pre-scripted errors.
#[derive(Default)]
pub struct ScriptedTarget {
    probe_error: Option<BackendError>,
    /// 1-based statement index -> error returned for that statement.
    statement_errors: HashMap<usize, BackendError>,
    batch_error: Option<BackendError>,
    executed: Mutex<Vec<String>>,
    batches: Mutex<Vec<String>>,
}

impl ScriptedTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_probe(mut self, error: BackendError) -> Self {
        self.probe_error = Some(error);
        self
    }

    pub fn failing_statement(mut self, index: usize, error: BackendError) -> Self {
        self.statement_errors.insert(index, error);
        self
    }

    pub fn failing_batch(mut self, error: BackendError) -> Self {
        self.batch_error = Some(error);
        self
    }

    /// Statements received, in order, including the ones that failed.
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }

    pub fn batches(&self) -> Vec<String> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl MigrationTarget for ScriptedTarget {
    async fn probe(&self) -> Result<(), BackendError> {
        match &self.probe_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn execute(&self, statement: &str) -> Result<(), BackendError> {
        let mut executed = self.executed.lock().unwrap();
        executed.push(statement.to_string());
        match self.statement_errors.get(&executed.len()) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn execute_batch(&self, script: &str) -> Result<(), BackendError> {
        self.batches.lock().unwrap().push(script.to_string());
        match &self.batch_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
