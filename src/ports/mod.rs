//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ResultMailer` - Delivery of ranked results by email

mod result_mailer;

pub use result_mailer::{DeliveryReceipt, MailerError, ResultMailer};
