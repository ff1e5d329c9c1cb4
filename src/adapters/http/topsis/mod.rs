//! TOPSIS HTTP adapter module.
//!
//! Provides the ranking endpoint and the service health check.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{EmailStatus, ErrorResponse, HealthResponse, RankRequest, RankResponse};
pub use handlers::{TopsisApiError, TopsisAppState};
pub use routes::{health_routes, topsis_routes};
