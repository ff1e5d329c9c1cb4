//! Application handlers.
//!
//! Command handlers that orchestrate domain operations and ports.

pub mod rank_alternatives;

pub use rank_alternatives::{
    EmailDelivery, RankAlternativesCommand, RankAlternativesHandler, RankAlternativesResult,
};
