//! DTOs for the TOPSIS endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::handlers::{EmailDelivery, RankAlternativesResult};
use crate::domain::foundation::ValidationError;
use crate::domain::topsis::ScoredRow;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/topsis/rank`.
#[derive(Debug, Clone, Deserialize)]
pub struct RankRequest {
    /// Alternatives as JSON objects; the first key of each is the identifier.
    #[serde(default)]
    pub rows: Vec<Map<String, Value>>,
    /// Comma-delimited weights.
    pub weights: Option<String>,
    /// Comma-delimited impacts.
    pub impacts: Option<String>,
    /// Recipient of the emailed report. Blank means no email.
    pub email: Option<String>,
}

impl RankRequest {
    /// The recipient, if one was actually supplied.
    pub fn recipient(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }

    /// Every row must carry the first row's columns in the same order.
    pub fn check_columns(&self) -> Result<(), ValidationError> {
        let Some((first, rest)) = self.rows.split_first() else {
            return Ok(());
        };
        for (index, row) in rest.iter().enumerate() {
            if !row.keys().eq(first.keys()) {
                return Err(ValidationError::invalid_format(
                    "rows",
                    format!("row {} columns do not match row 1", index + 2),
                ));
            }
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Ranked results of one evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct RankResponse {
    pub results: Vec<ScoredRow>,
    pub alternative_count: usize,
    pub criteria: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailStatus>,
    pub evaluated_at: DateTime<Utc>,
}

impl RankResponse {
    pub fn from_result(result: RankAlternativesResult, evaluated_at: DateTime<Utc>) -> Self {
        Self {
            alternative_count: result.results.len(),
            results: result.results,
            criteria: result.criteria,
            email: result.delivery.as_ref().map(EmailStatus::from),
            evaluated_at,
        }
    }
}

/// Outcome of the optional email delivery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailStatus {
    pub recipient: String,
    pub delivered: bool,
    pub error: Option<String>,
}

impl From<&EmailDelivery> for EmailStatus {
    fn from(delivery: &EmailDelivery) -> Self {
        Self {
            recipient: delivery.recipient.to_string(),
            delivered: delivery.delivered(),
            error: delivery.outcome.as_ref().err().map(ToString::to_string),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}
