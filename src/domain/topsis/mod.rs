//! TOPSIS Module - Multi-criteria ranking of alternatives.
//!
//! Ranks the rows of a criterion table by their relative closeness to the
//! ideal solution (Technique for Order Preference by Similarity to Ideal
//! Solution).
//!
//! # Components
//!
//! - `CriterionTable` - Input rows keyed by column name
//! - `WeightVector` / `ImpactVector` - Per-criterion weights and directions
//! - `DecisionMatrix` - Numeric matrix with normalization, ideals and distances
//! - `TopsisEvaluator` - Validation, scoring and ranking
//! - `ScoredRow` - Output row with score and rank
//!
//! All functions are pure and stateless. No ports or adapters are involved.

mod criteria_spec;
mod criterion_table;
mod decision_matrix;
mod errors;
mod evaluator;
mod scored_row;

pub use criteria_spec::{split_list, Impact, ImpactVector, WeightVector, LIST_DELIMITER};
pub use criterion_table::{CellValue, CriterionTable, CriterionTableBuilder, Row};
pub use decision_matrix::DecisionMatrix;
pub use errors::TopsisError;
pub use evaluator::TopsisEvaluator;
pub use scored_row::{ScoredRow, RANK_FIELD, SCORE_FIELD};
