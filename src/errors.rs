// Copyright 2025 Cowboy AI, LLC.

//! Error types for record construction and display

use thiserror::Error;

/// Errors that can occur while building or printing records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The employee collaborator could not provide a record
    #[error("Employee unavailable: {reason}")]
    EmployeeUnavailable {
        /// Why the lookup failed
        reason: String,
    },

    /// An element of a sequence does not share the first element's shape
    #[error("Shape mismatch at element {index}: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Position of the offending element
        index: usize,
        /// Shape of the first element
        expected: String,
        /// Shape of the offending element
        found: String,
    },

    /// A sequence with no elements has no inferable shape
    #[error("Empty sequence: element shape cannot be inferred")]
    EmptySequence,

    /// A value that should have been a record was something else
    #[error("Not a record: {0}")]
    NotARecord(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Writing the output failed
    #[error("Output error: {0}")]
    Output(String),
}

/// Result type for record operations
pub type RecordResult<T> = Result<T, RecordError>;

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        RecordError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for RecordError {
    fn from(err: std::io::Error) -> Self {
        RecordError::Output(err.to_string())
    }
}

impl RecordError {
    /// Create an employee-unavailable error
    pub fn employee_unavailable(reason: impl Into<String>) -> Self {
        RecordError::EmployeeUnavailable {
            reason: reason.into(),
        }
    }

    /// Check if this error comes from shape validation
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            RecordError::ShapeMismatch { .. }
                | RecordError::EmptySequence
                | RecordError::NotARecord(_)
        )
    }

    /// Check if this error aborts the demo before anything is printed
    pub fn is_fatal_startup(&self) -> bool {
        matches!(self, RecordError::EmployeeUnavailable { .. })
    }
}
