//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `email` - Result mailers (Resend, in-memory) and the HTML report
//! - `http` - Axum routes for ranking and health

pub mod email;
pub mod http;

pub use email::{InMemoryMailer, ResendConfig, ResendMailer};
