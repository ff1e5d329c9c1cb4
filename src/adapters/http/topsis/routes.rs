//! HTTP routes for the TOPSIS endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{health, rank_alternatives, TopsisAppState};

/// Creates the TOPSIS router with all routes.
pub fn topsis_routes(state: TopsisAppState) -> Router {
    Router::new()
        // POST /api/topsis/rank
        .route("/api/topsis/rank", post(rank_alternatives))
        .with_state(state)
}

/// Creates the health check router.
pub fn health_routes() -> Router {
    Router::new()
        // GET /health
        .route("/health", get(health))
}
