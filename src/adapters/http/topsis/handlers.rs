//! HTTP handlers for the TOPSIS endpoints.
//!
//! These handlers connect Axum routes to the ranking command handler.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde_json::json;

use crate::application::handlers::{RankAlternativesCommand, RankAlternativesHandler};
use crate::domain::foundation::{EmailAddress, ErrorCode, ValidationError};
use crate::domain::topsis::{CriterionTable, TopsisError};
use crate::ports::ResultMailer;

use super::dto::{ErrorResponse, HealthResponse, RankRequest, RankResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// TOPSIS API error that implements IntoResponse.
#[derive(Debug)]
pub enum TopsisApiError {
    /// The body was not valid JSON for a rank request.
    MalformedBody(String),
    /// A request field failed validation before evaluation.
    InvalidRequest(ValidationError),
    /// The evaluator rejected the table or criteria.
    Evaluation(TopsisError),
}

impl TopsisApiError {
    fn error_response(&self) -> ErrorResponse {
        match self {
            TopsisApiError::MalformedBody(msg) => {
                ErrorResponse::new(ErrorCode::ValidationFailed, msg.clone())
            }
            TopsisApiError::InvalidRequest(err) => ErrorResponse::new(err.code(), err.to_string()),
            TopsisApiError::Evaluation(err) => {
                let response = ErrorResponse::new(err.code(), err.to_string());
                match err {
                    TopsisError::CriteriaMismatch {
                        expected,
                        weights,
                        impacts,
                    } => response.with_details(json!({
                        "criteria": expected,
                        "weights": weights,
                        "impacts": impacts,
                    })),
                    TopsisError::NonNumericValue { column, row } => {
                        response.with_details(json!({ "column": column, "row": row }))
                    }
                    _ => response,
                }
            }
        }
    }
}

impl IntoResponse for TopsisApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self.error_response())).into_response()
    }
}

impl From<TopsisError> for TopsisApiError {
    fn from(error: TopsisError) -> Self {
        TopsisApiError::Evaluation(error)
    }
}

impl From<ValidationError> for TopsisApiError {
    fn from(error: ValidationError) -> Self {
        TopsisApiError::InvalidRequest(error)
    }
}

impl From<JsonRejection> for TopsisApiError {
    fn from(rejection: JsonRejection) -> Self {
        TopsisApiError::MalformedBody(rejection.body_text())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing TOPSIS dependencies.
#[derive(Clone)]
pub struct TopsisAppState {
    pub mailer: Arc<dyn ResultMailer>,
}

impl TopsisAppState {
    pub fn new(mailer: Arc<dyn ResultMailer>) -> Self {
        Self { mailer }
    }

    pub fn rank_alternatives_handler(&self) -> RankAlternativesHandler {
        RankAlternativesHandler::new(self.mailer.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/topsis/rank
///
/// Ranks the submitted alternatives and optionally emails the result table.
pub async fn rank_alternatives(
    State(state): State<TopsisAppState>,
    payload: Result<Json<RankRequest>, JsonRejection>,
) -> Result<Json<RankResponse>, TopsisApiError> {
    let Json(request) = payload?;

    let weights = required_text("weights", request.weights.as_deref())?;
    let impacts = required_text("impacts", request.impacts.as_deref())?;
    let recipient = request.recipient().map(EmailAddress::parse).transpose()?;
    request.check_columns()?;

    let cmd = RankAlternativesCommand {
        table: CriterionTable::from(request.rows),
        weights,
        impacts,
        recipient,
    };

    let handler = state.rank_alternatives_handler();
    let result = handler.handle(cmd).await?;

    Ok(Json(RankResponse::from_result(result, Utc::now())))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Rejects a missing or blank text field.
fn required_text(field: &str, value: Option<&str>) -> Result<String, ValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        _ => Err(ValidationError::empty_field(field)),
    }
}
