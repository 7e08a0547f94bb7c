//! # Error Types
//!
//! A single error enum covers the three failure families of the service:
//!
//! - **Client input** ([`MomentoError::Validation`]): surfaced as HTTP 422, never retried
//! - **Lookup** ([`MomentoError::OutOfRange`]): the age passed validation but the loaded
//!   table has no row for it, surfaced as an internal error
//! - **Startup** (data load, configuration): fatal, the server never starts listening

use polars::prelude::PolarsError;
use serde::Serialize;
use thiserror::Error;

/// One rejected request parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum MomentoError {
    /// Request parameters were missing, malformed or out of bounds
    #[error("invalid request parameters: {}", describe_fields(.0))]
    Validation(Vec<FieldError>),

    /// Age accepted at the boundary but beyond the rows of the loaded table
    #[error("age {age} exceeds available data ({rows} rows)")]
    OutOfRange { age: u32, rows: usize },

    /// Backing table missing or malformed
    #[error("failed to load life expectancy data: {0}")]
    DataLoad(String),

    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(garde::Report),
}

impl MomentoError {
    /// Whether the caller sent something wrong (as opposed to a server side failure).
    pub fn is_client_error(&self) -> bool {
        matches!(self, MomentoError::Validation(_))
    }
}

/// Flatten a garde report into field errors, one per failed rule.
pub fn field_errors_from_report(report: &garde::Report) -> Vec<FieldError> {
    report
        .iter()
        .map(|(path, error)| FieldError::new(path.to_string(), error.message()))
        .collect()
}

fn describe_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_lists_every_field() {
        let err = MomentoError::Validation(vec![
            FieldError::new("age", "field required"),
            FieldError::new("gender", "field required"),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("age: field required"));
        assert!(msg.contains("gender: field required"));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_out_of_range_is_not_client_error() {
        let err = MomentoError::OutOfRange { age: 121, rows: 120 };
        assert_eq!(err.to_string(), "age 121 exceeds available data (120 rows)");
        assert!(!err.is_client_error());
    }
}
