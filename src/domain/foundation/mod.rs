//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the ranking domain.

mod email;
mod errors;
mod score;

pub use email::EmailAddress;
pub use errors::{ErrorCode, ValidationError};
pub use score::{Score, SCORE_DECIMALS};
