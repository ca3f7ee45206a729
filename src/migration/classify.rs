use super::target::BackendError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The object the statement creates is already there.
    AlreadyApplied,
    /// The referenced table does not exist yet.
    UndefinedTable,
    Fatal,
}

/// SQLSTATE codes the runner understands. Anything not listed is fatal.
const SQLSTATE_CLASSES: &[(&str, ErrorClass)] = &[
    ("42P07", ErrorClass::AlreadyApplied), // duplicate_table
    ("42710", ErrorClass::AlreadyApplied), // duplicate_object
    ("23505", ErrorClass::AlreadyApplied), // unique_violation
    ("42P06", ErrorClass::AlreadyApplied), // duplicate_schema
    ("42723", ErrorClass::AlreadyApplied), // duplicate_function
    ("42701", ErrorClass::AlreadyApplied), // duplicate_column
    ("42P04", ErrorClass::AlreadyApplied), // duplicate_database
    ("42P01", ErrorClass::UndefinedTable), // undefined_table
];

pub fn classify(error: &BackendError) -> ErrorClass {
    if let Some(code) = error.code.as_deref() {
        return SQLSTATE_CLASSES
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, class)| *class)
            .unwrap_or(ErrorClass::Fatal);
    }

    // Some transports drop the SQLSTATE; fall back to the message text.
    let message = error.message.to_ascii_lowercase();
    if message.contains("already exists") || message.contains("duplicate key") {
        ErrorClass::AlreadyApplied
    } else if message.contains("relation") && message.contains("does not exist") {
        ErrorClass::UndefinedTable
    } else {
        ErrorClass::Fatal
    }
}
