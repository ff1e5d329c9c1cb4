//! Evaluation errors.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Reasons an evaluation is rejected.
///
/// Every variant is an input-validation failure. None of them carries a
/// partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error("The uploaded table is empty")]
    EmptyInput,

    #[error(
        "Criteria mismatch: found {expected} criterion columns but received {weights} weights and {impacts} impacts"
    )]
    CriteriaMismatch {
        expected: usize,
        weights: usize,
        impacts: usize,
    },

    #[error("Row {row} has {actual} values but the matrix has {expected} criteria")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Non-numeric value detected in column: {column} (row {row})")]
    NonNumericValue { column: String, row: usize },

    #[error("Invalid weight '{token}' at position {position}: expected a non-negative number")]
    InvalidWeight { token: String, position: usize },

    #[error("Invalid impact '{token}' at position {position}: expected '+' or '-'")]
    InvalidImpact { token: String, position: usize },
}

impl TopsisError {
    /// Returns the error code reported to callers.
    pub fn code(&self) -> ErrorCode {
        match self {
            TopsisError::EmptyInput => ErrorCode::EmptyInput,
            TopsisError::CriteriaMismatch { .. } | TopsisError::RaggedRow { .. } => {
                ErrorCode::CriteriaMismatch
            }
            TopsisError::NonNumericValue { .. } => ErrorCode::NonNumericValue,
            TopsisError::InvalidWeight { .. } => ErrorCode::InvalidWeight,
            TopsisError::InvalidImpact { .. } => ErrorCode::InvalidImpact,
        }
    }
}
