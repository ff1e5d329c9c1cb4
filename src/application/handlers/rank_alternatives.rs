//! RankAlternativesHandler - Command handler for ranking a criterion table.
//!
//! Runs the TOPSIS evaluation and, when a recipient is given, emails the
//! ranked results. A failed evaluation never reaches the mailer. A failed
//! delivery does not fail the command; it is reported in the result.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::foundation::EmailAddress;
use crate::domain::topsis::{CriterionTable, ScoredRow, TopsisError, TopsisEvaluator};
use crate::ports::{DeliveryReceipt, MailerError, ResultMailer};

/// Command to rank the alternatives of a table.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    /// Alternatives by columns; the first column is the identifier.
    pub table: CriterionTable,
    /// Comma-delimited weights, one per criterion.
    pub weights: String,
    /// Comma-delimited impacts (`+` / `-`), one per criterion.
    pub impacts: String,
    /// Optional recipient of the emailed report.
    pub recipient: Option<EmailAddress>,
}

/// Outcome of emailing the results.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailDelivery {
    pub recipient: EmailAddress,
    pub outcome: Result<DeliveryReceipt, MailerError>,
}

impl EmailDelivery {
    /// Returns true if the mailer accepted the message.
    pub fn delivered(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Result of a successful ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankAlternativesResult {
    /// Scored rows ordered by rank.
    pub results: Vec<ScoredRow>,
    /// Criterion column names in table order.
    pub criteria: Vec<String>,
    /// Present when a recipient was requested.
    pub delivery: Option<EmailDelivery>,
}

/// Handler for ranking alternatives.
pub struct RankAlternativesHandler {
    mailer: Arc<dyn ResultMailer>,
}

impl RankAlternativesHandler {
    pub fn new(mailer: Arc<dyn ResultMailer>) -> Self {
        Self { mailer }
    }

    pub async fn handle(
        &self,
        cmd: RankAlternativesCommand,
    ) -> Result<RankAlternativesResult, TopsisError> {
        let results = TopsisEvaluator::evaluate(&cmd.table, &cmd.weights, &cmd.impacts)
            .map_err(|err| {
                debug!(error = %err, rows = cmd.table.row_count(), "Evaluation rejected");
                err
            })?;
        let criteria = TopsisEvaluator::criteria(&cmd.table);

        let best = results
            .first()
            .and_then(ScoredRow::label)
            .map(ToString::to_string)
            .unwrap_or_default();
        info!(
            alternatives = results.len(),
            criteria = criteria.len(),
            best = %best,
            "Ranked alternatives"
        );

        let delivery = match cmd.recipient {
            Some(recipient) => Some(self.deliver(recipient, &results).await),
            None => None,
        };

        Ok(RankAlternativesResult {
            results,
            criteria,
            delivery,
        })
    }

    async fn deliver(&self, recipient: EmailAddress, results: &[ScoredRow]) -> EmailDelivery {
        let outcome = self.mailer.send_results(&recipient, results).await;

        match &outcome {
            Ok(receipt) => info!(
                recipient = %recipient,
                message_id = %receipt.message_id,
                "Results emailed"
            ),
            Err(err) => warn!(
                recipient = %recipient,
                transient = err.is_transient(),
                "Failed to email results: {}",
                err
            ),
        }

        EmailDelivery { recipient, outcome }
    }
}
