//! HTTP adapters - REST API implementations.

pub mod topsis;

use axum::Router;

pub use topsis::{health_routes, topsis_routes, TopsisAppState};

/// Builds the full API router without middleware layers.
pub fn api_router(state: TopsisAppState) -> Router {
    Router::new()
        .merge(topsis_routes(state))
        .merge(health_routes())
}
