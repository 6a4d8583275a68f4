//! Custom error types for Moneta
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use std::fmt;

use thiserror::Error;

use crate::models::ExpenseId;

/// Business-rule failures for a single draft or imported record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Amount is not a number, or not strictly positive
    #[error("Invalid amount")]
    InvalidAmount,

    /// Description is blank after trimming
    #[error("Description cannot be empty")]
    EmptyDescription,

    /// Date is absent or not a valid calendar day
    #[error("Date is required")]
    MissingDate,

    /// Date lies after today
    #[error("Date cannot be in the future")]
    FutureDate,

    /// Imported record carries no id
    #[error("Id is required")]
    MissingId,

    /// Imported record reuses an id already seen in the same document
    #[error("Duplicate id: {0}")]
    DuplicateId(ExpenseId),
}

/// A validation failure tied to one record of an import document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordError {
    /// Zero-based position of the record in the document
    pub index: usize,
    /// The record's id, if it had one
    pub id: Option<ExpenseId>,
    pub error: ValidationError,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Record {} (id {}): {}", self.index + 1, id, self.error),
            None => write!(f, "Record {}: {}", self.index + 1, self.error),
        }
    }
}

/// The main error type for Moneta operations
#[derive(Error, Debug)]
pub enum MonetaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed persisted or imported text
    #[error("Parse error: {0}")]
    Parse(String),

    /// A draft failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// One or more imported records failed validation
    #[error("Import rejected: {} invalid record(s)", .0.len())]
    ImportValidation(Vec<RecordError>),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Host file capability errors
    #[error("Platform error: {0}")]
    Platform(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl MonetaError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::ImportValidation(_))
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<std::io::Error> for MonetaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MonetaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Moneta operations
pub type MonetaResult<T> = Result<T, MonetaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MonetaError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = MonetaError::expense_not_found("42");
        assert_eq!(err.to_string(), "Expense not found: 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::InvalidAmount.to_string(), "Invalid amount");
        assert_eq!(
            ValidationError::FutureDate.to_string(),
            "Date cannot be in the future"
        );

        let err: MonetaError = ValidationError::EmptyDescription.into();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: Description cannot be empty"
        );
    }

    #[test]
    fn test_import_validation_counts_records() {
        let err = MonetaError::ImportValidation(vec![
            RecordError {
                index: 0,
                id: Some(ExpenseId::from_raw(7)),
                error: ValidationError::InvalidAmount,
            },
            RecordError {
                index: 3,
                id: None,
                error: ValidationError::MissingId,
            },
        ]);
        assert_eq!(err.to_string(), "Import rejected: 2 invalid record(s)");
    }

    #[test]
    fn test_record_error_display() {
        let with_id = RecordError {
            index: 1,
            id: Some(ExpenseId::from_raw(99)),
            error: ValidationError::MissingDate,
        };
        assert_eq!(with_id.to_string(), "Record 2 (id 99): Date is required");

        let without_id = RecordError {
            index: 0,
            id: None,
            error: ValidationError::MissingId,
        };
        assert_eq!(without_id.to_string(), "Record 1: Id is required");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let moneta_err: MonetaError = io_err.into();
        assert!(matches!(moneta_err, MonetaError::Io(_)));
    }
}
