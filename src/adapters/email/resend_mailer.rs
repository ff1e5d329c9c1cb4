//! Resend Mailer - Implementation of ResultMailer over the Resend HTTP API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ResendConfig::new(api_key, "TopsisCore <noreply@topsiscore.app>")
//!     .with_base_url("https://api.resend.com")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let mailer = ResendMailer::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::html_report::{HtmlReport, REPORT_SUBJECT};
use crate::domain::foundation::EmailAddress;
use crate::domain::topsis::ScoredRow;
use crate::ports::{DeliveryReceipt, MailerError, ResultMailer};

/// Configuration for the Resend mailer.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// API key for authentication.
    api_key: SecretString,
    /// Value of the `from` field, e.g. `"Name <address>"`.
    pub from: String,
    /// Base URL for the API (default: https://api.resend.com).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ResendConfig {
    /// Creates a new configuration with the given API key and sender.
    pub fn new(api_key: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            from: from.into(),
            base_url: "https://api.resend.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Resend API mailer.
pub struct ResendMailer {
    config: ResendConfig,
    client: Client,
}

impl ResendMailer {
    /// Creates a new mailer with the given configuration.
    pub fn new(config: ResendConfig) -> Result<Self, MailerError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MailerError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.config.base_url.trim_end_matches('/'))
    }

    fn to_resend_request(&self, recipient: &EmailAddress, results: &[ScoredRow]) -> ResendEmail {
        ResendEmail {
            from: self.config.from.clone(),
            to: vec![recipient.as_str().to_string()],
            subject: REPORT_SUBJECT.to_string(),
            html: HtmlReport::render(results),
        }
    }

    fn map_send_error(&self, e: reqwest::Error) -> MailerError {
        if e.is_timeout() {
            MailerError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            MailerError::network(format!("Connection failed: {}", e))
        } else {
            MailerError::network(e.to_string())
        }
    }
}

/// Maps a non-success status and body to a mailer error.
fn status_error(status: u16, body: &str) -> MailerError {
    match status {
        401 | 403 => MailerError::AuthenticationFailed,
        _ => {
            let message = serde_json::from_str::<ResendErrorBody>(body)
                .ok()
                .and_then(|parsed| parsed.message)
                .unwrap_or_else(|| body.to_string());
            MailerError::Rejected { status, message }
        }
    }
}

#[async_trait]
impl ResultMailer for ResendMailer {
    async fn send_results(
        &self,
        recipient: &EmailAddress,
        results: &[ScoredRow],
    ) -> Result<DeliveryReceipt, MailerError> {
        if results.is_empty() {
            return Err(MailerError::EmptyResults);
        }

        let request = self.to_resend_request(recipient, results);
        tracing::debug!(recipient = %recipient, rows = results.len(), "Sending results via Resend");

        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(self.config.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), &body));
        }

        let sent: ResendSent = response
            .json()
            .await
            .map_err(|e| MailerError::network(format!("Failed to parse response: {}", e)))?;

        Ok(DeliveryReceipt::new(sent.id))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Resend API Types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct ResendEmail {
    from: String,
    to: Vec<String>,
    subject: String,
    html: String,
}

#[derive(Debug, Deserialize)]
struct ResendSent {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ResendErrorBody {
    message: Option<String>,
}
