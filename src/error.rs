//! Error types for the student roster.
//!
//! This module defines custom error types using `thiserror` for precise
//! error handling. Field-shape violations live in
//! [`crate::domain::ValidationError`] and are wrapped transparently here.

use crate::domain::{StudentId, ValidationError};
use thiserror::Error;

/// Errors that can occur during roster operations.
#[derive(Error, Debug)]
pub enum RosterError {
    /// A field value failed validation; nothing was stored or changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No student with the given id exists in the roster.
    ///
    /// Distinct from validation failure: the request was well-formed but
    /// named an unknown student.
    #[error("Student not found with ID: {0}")]
    NotFound(StudentId),
}

/// Errors that can occur during CSV import/export.
#[derive(Error, Debug)]
pub enum CsvError {
    /// Reading or writing the underlying stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV itself is malformed (bad header, wrong arity, unparsable cell).
    #[error("Malformed CSV: {0}")]
    Malformed(#[from] csv::Error),

    /// A row parsed but its values failed validation. Nothing is imported.
    #[error("Row {row}: {source}")]
    InvalidRow {
        /// 1-based data row number (header excluded).
        row: usize,
        source: ValidationError,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RosterError
pub type RosterResult<T> = Result<T, RosterError>;

/// Convenience type alias for Results with CsvError
pub type CsvResult<T> = Result<T, CsvError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RosterError::NotFound(StudentId::new(7).unwrap());
        assert_eq!(err.to_string(), "Student not found with ID: 7");

        let err = RosterError::Validation(ValidationError::InvalidAge(0));
        assert_eq!(err.to_string(), "Age must be a positive integer: 0");

        let err = ConfigError::InvalidValue {
            var: "ROSTER_ACTIVITY_CAPACITY".to_string(),
            reason: "Must be a positive number".to_string(),
        };
        assert!(err.to_string().contains("ROSTER_ACTIVITY_CAPACITY"));
    }

    #[test]
    fn test_invalid_row_display() {
        let err = CsvError::InvalidRow {
            row: 3,
            source: ValidationError::InvalidPhone("123".to_string()),
        };
        assert!(err.to_string().starts_with("Row 3:"));
        assert!(err.to_string().contains("123"));
    }
}
