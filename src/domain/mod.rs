//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `topsis` - Criterion tables and the TOPSIS evaluator

pub mod foundation;
pub mod topsis;
