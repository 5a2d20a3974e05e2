//! Model-level error types
//!
//! Raised when a payload from the API boundary cannot be turned into a
//! strict domain type.

use thiserror::Error;

/// Normalisation / parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A required field was absent (or null / empty)
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// A numeric field could not be parsed
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// A field was present but violates a constraint
    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ModelError {
    /// Create a constraint violation error
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for model conversions
pub type ModelResult<T> = Result<T, ModelError>;
