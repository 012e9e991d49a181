//! Error types for the maintenance tracker.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all record store and reporting operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Insert of a record whose id already exists
    #[error("{entity} with ID '{id}' already exists")]
    DuplicateKey { entity: &'static str, id: String },
    /// Replace or lookup of a record that does not exist
    #[error("{entity} with ID '{id}' not found")]
    NotFound { entity: &'static str, id: String },
    /// Status value outside its enumerated set
    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidEnumValue { field: &'static str, value: String },
    /// Date or time string not in the expected format
    #[error("Invalid format for field '{field}': '{value}' (expected {expected})")]
    InvalidDateFormat {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// No XDG data directory could be resolved
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TrackerError {
        TrackerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TrackerError {
        TrackerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TrackerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Shorthand for a `DuplicateKey` error.
    pub fn duplicate(entity: &'static str, id: impl Into<String>) -> Self {
        Self::DuplicateKey {
            entity,
            id: id.into(),
        }
    }

    /// Shorthand for a `NotFound` error.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrackerError::database(message).with_source(e))
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_message() {
        let err = TrackerError::duplicate("Machine", "M1");
        assert_eq!(err.to_string(), "Machine with ID 'M1' already exists");
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = TrackerError::invalid_input("field").with_reason("unknown grouping field");
        match err {
            TrackerError::InvalidInput { field, reason } => {
                assert_eq!(field, "field");
                assert_eq!(reason, "unknown grouping field");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to query machine").unwrap_err();
        assert!(err.to_string().contains("Failed to query machine"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
