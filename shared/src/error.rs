//! Client-side validation errors
//!
//! Raised before a request is built; a payload that fails validation never
//! reaches the backend.

use thiserror::Error;

/// Validation failure for a single form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field missing or blank
    #[error("{field} is required")]
    Missing { field: &'static str },

    /// Field is present but not a number
    #[error("{field} must be a number (got {value:?})")]
    NotNumeric { field: &'static str, value: String },

    /// Numeric field outside its accepted range
    #[error("{field} is out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },

    /// Relation list that must not be empty
    #[error("at least one {what} is required")]
    Empty { what: &'static str },
}

impl ValidationError {
    /// Create a Missing error
    pub fn missing(field: &'static str) -> Self {
        Self::Missing { field }
    }

    /// Create a NotNumeric error
    pub fn not_numeric(field: &'static str, value: impl Into<String>) -> Self {
        Self::NotNumeric {
            field,
            value: value.into(),
        }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(field: &'static str, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            field,
            reason: reason.into(),
        }
    }

    /// Create an Empty error
    pub fn empty(what: &'static str) -> Self {
        Self::Empty { what }
    }

    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::NotNumeric { field, .. }
            | Self::OutOfRange { field, .. } => field,
            Self::Empty { what } => what,
        }
    }
}

/// Result type for form validation
pub type ValidationResult<T> = Result<T, ValidationError>;
