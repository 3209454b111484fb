//! Tally XML-over-HTTP request building and the service facade.
//!
//! - [`envelope`] assembles `<ENVELOPE>` documents.
//! - [`requests`] holds the prebuilt export/execute requests.
//! - [`transport`] is the port implemented by `tallyai-infra`.
//! - [`service`] pairs the two into typed operations.

pub mod envelope;
pub mod requests;
pub mod service;
pub mod transport;
