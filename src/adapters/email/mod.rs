//! Email adapters - Implementations of the ResultMailer port.
//!
//! - `ResendMailer` - Sends the HTML report through the Resend API
//! - `InMemoryMailer` - Captures reports in memory (tests, email disabled)
//! - `HtmlReport` - Renders ranked results as an HTML table

mod html_report;
mod in_memory_mailer;
mod resend_mailer;

pub use html_report::{HtmlReport, REPORT_SUBJECT};
pub use in_memory_mailer::{InMemoryMailer, SentReport, DEFAULT_CAPTURE_LIMIT};
pub use resend_mailer::{ResendConfig, ResendMailer};
