//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the error code for this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::InvalidFormat { field, .. } if field == "email" => {
                ErrorCode::InvalidEmail
            }
            _ => ErrorCode::ValidationFailed,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation errors
    ValidationFailed,
    InvalidEmail,

    // Evaluation errors
    EmptyInput,
    CriteriaMismatch,
    NonNumericValue,
    InvalidWeight,
    InvalidImpact,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidEmail => "INVALID_EMAIL",
            ErrorCode::EmptyInput => "EMPTY_INPUT",
            ErrorCode::CriteriaMismatch => "CRITERIA_MISMATCH",
            ErrorCode::NonNumericValue => "NON_NUMERIC_VALUE",
            ErrorCode::InvalidWeight => "INVALID_WEIGHT",
            ErrorCode::InvalidImpact => "INVALID_IMPACT",
        };
        write!(f, "{}", s)
    }
}
