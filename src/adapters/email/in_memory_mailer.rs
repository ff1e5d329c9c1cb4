//! In-memory Result Mailer for tests and deployments without an email provider.
//!
//! Deliveries are logged and the most recent ones are kept in a bounded
//! buffer instead of being sent. Failures can be injected to exercise the
//! delivery error path.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::html_report::HtmlReport;
use crate::domain::foundation::EmailAddress;
use crate::domain::topsis::ScoredRow;
use crate::ports::{DeliveryReceipt, MailerError, ResultMailer};

/// Number of deliveries retained by [`InMemoryMailer::new`].
pub const DEFAULT_CAPTURE_LIMIT: usize = 50;

/// A captured delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct SentReport {
    pub recipient: EmailAddress,
    pub rows: Vec<ScoredRow>,
    pub html: String,
}

#[derive(Debug, Default)]
struct Mailbox {
    reports: VecDeque<SentReport>,
    delivered: usize,
}

/// Mailer that records deliveries instead of sending them.
///
/// Only the last `limit` deliveries are kept; older ones are evicted.
#[derive(Debug, Clone)]
pub struct InMemoryMailer {
    mailbox: Arc<Mutex<Mailbox>>,
    limit: usize,
    failure: Option<MailerError>,
}

impl InMemoryMailer {
    /// Creates a mailer that accepts every delivery and keeps the last
    /// [`DEFAULT_CAPTURE_LIMIT`] of them.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_CAPTURE_LIMIT)
    }

    /// Creates a mailer that keeps at most `limit` deliveries. A limit of 0
    /// only logs.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            mailbox: Arc::default(),
            limit,
            failure: None,
        }
    }

    /// Creates a mailer that fails every delivery with `error`.
    pub fn failing(error: MailerError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new()
        }
    }

    /// Returns the retained deliveries, oldest first.
    pub fn sent(&self) -> Vec<SentReport> {
        self.mailbox
            .lock()
            .map(|mailbox| mailbox.reports.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns the number of retained deliveries.
    pub fn sent_count(&self) -> usize {
        self.mailbox
            .lock()
            .map(|mailbox| mailbox.reports.len())
            .unwrap_or(0)
    }

    /// Returns the number of deliveries accepted since creation.
    pub fn delivered_count(&self) -> usize {
        self.mailbox
            .lock()
            .map(|mailbox| mailbox.delivered)
            .unwrap_or(0)
    }
}

impl Default for InMemoryMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResultMailer for InMemoryMailer {
    async fn send_results(
        &self,
        recipient: &EmailAddress,
        results: &[ScoredRow],
    ) -> Result<DeliveryReceipt, MailerError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        if results.is_empty() {
            return Err(MailerError::EmptyResults);
        }

        let mut mailbox = self
            .mailbox
            .lock()
            .map_err(|_| MailerError::network("In-memory mailbox poisoned"))?;
        mailbox.delivered += 1;
        let message_id = format!("in-memory-{}", mailbox.delivered);

        if self.limit > 0 {
            if mailbox.reports.len() == self.limit {
                mailbox.reports.pop_front();
            }
            mailbox.reports.push_back(SentReport {
                recipient: recipient.clone(),
                rows: results.to_vec(),
                html: HtmlReport::render(results),
            });
        }

        tracing::info!(
            recipient = %recipient,
            rows = results.len(),
            message_id = %message_id,
            "Captured results email (no email provider configured)"
        );

        Ok(DeliveryReceipt::new(message_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Score;
    use crate::domain::topsis::Row;

    fn rows() -> Vec<ScoredRow> {
        vec![ScoredRow::new(
            Row::new().with("Name", "A").with("Cost", 1),
            Score::new(1.0),
            1,
        )]
    }

    fn recipient() -> EmailAddress {
        EmailAddress::parse("user@example.com").unwrap()
    }

    #[tokio::test]
    async fn captures_deliveries() {
        let mailer = InMemoryMailer::new();

        let receipt = mailer.send_results(&recipient(), &rows()).await.unwrap();
        assert_eq!(receipt.message_id, "in-memory-1");

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient, recipient());
        assert_eq!(sent[0].rows, rows());
        assert!(sent[0].html.contains(">A</td>"));
    }

    #[tokio::test]
    async fn evicts_oldest_delivery_past_limit() {
        let mailer = InMemoryMailer::with_limit(2);
        let recipients = ["a@example.com", "b@example.com", "c@example.com"];

        for address in recipients {
            let recipient = EmailAddress::parse(address).unwrap();
            mailer.send_results(&recipient, &rows()).await.unwrap();
        }

        let kept: Vec<String> = mailer
            .sent()
            .iter()
            .map(|report| report.recipient.to_string())
            .collect();
        assert_eq!(kept, vec!["b@example.com", "c@example.com"]);
        assert_eq!(mailer.delivered_count(), 3);
    }

    #[tokio::test]
    async fn zero_limit_only_logs() {
        let mailer = InMemoryMailer::with_limit(0);

        let receipt = mailer.send_results(&recipient(), &rows()).await.unwrap();
        assert_eq!(receipt.message_id, "in-memory-1");
        assert_eq!(mailer.sent_count(), 0);
        assert_eq!(mailer.delivered_count(), 1);
    }

    #[tokio::test]
    async fn clones_share_mailbox() {
        let mailer = InMemoryMailer::new();
        let clone = mailer.clone();

        clone.send_results(&recipient(), &rows()).await.unwrap();
        assert_eq!(mailer.sent_count(), 1);
    }

    #[tokio::test]
    async fn failing_mailer_returns_error_and_records_nothing() {
        let mailer = InMemoryMailer::failing(MailerError::AuthenticationFailed);

        let err = mailer.send_results(&recipient(), &rows()).await.unwrap_err();
        assert_eq!(err, MailerError::AuthenticationFailed);
        assert_eq!(mailer.sent_count(), 0);
    }

    #[tokio::test]
    async fn empty_results_are_rejected() {
        let mailer = InMemoryMailer::new();
        let err = mailer.send_results(&recipient(), &[]).await.unwrap_err();
        assert_eq!(err, MailerError::EmptyResults);
    }
}
