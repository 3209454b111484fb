//! Business logic and trait definitions for TallyAI.
//!
//! This crate defines the "ports" that the infrastructure layer implements
//! (e.g. [`tally::transport::TallyTransport`]). It depends only on
//! `tallyai-types` -- never on `tallyai-infra` or any network crate.

pub mod chat;
pub mod tally;
