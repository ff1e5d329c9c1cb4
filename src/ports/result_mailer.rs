//! Result Mailer Port - Delivery of ranked results by email.
//!
//! The application layer depends on this trait to send a finished ranking
//! to a recipient. Adapters decide how the message is rendered and
//! transported (Resend HTTP API, in-memory capture).

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::EmailAddress;
use crate::domain::topsis::ScoredRow;

/// Port for delivering ranked results.
///
/// # Contract
///
/// Implementations must:
/// - Deliver every row, in the order given
/// - Return a receipt only once the transport accepted the message
/// - Never retry silently on permanent failures
#[async_trait]
pub trait ResultMailer: Send + Sync {
    /// Sends the ranked results to `recipient`.
    async fn send_results(
        &self,
        recipient: &EmailAddress,
        results: &[ScoredRow],
    ) -> Result<DeliveryReceipt, MailerError>;
}

/// Confirmation returned by a mailer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryReceipt {
    /// Transport-assigned message identifier.
    pub message_id: String,
}

impl DeliveryReceipt {
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
        }
    }
}

/// Errors from result delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailerError {
    #[error("Email provider rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Email provider authentication failed")]
    AuthenticationFailed,

    #[error("Email request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Nothing to send: result set is empty")]
    EmptyResults,
}

impl MailerError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        MailerError::Network(message.into())
    }

    /// Returns true if a later attempt may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            MailerError::Timeout { .. } | MailerError::Network(_) => true,
            MailerError::Rejected { status, .. } => *status == 429 || *status >= 500,
            MailerError::AuthenticationFailed | MailerError::EmptyResults => false,
        }
    }
}
