//! Infrastructure layer for TallyAI.
//!
//! Contains implementations of the ports defined in `tallyai-core`:
//! the reqwest-backed Tally transport, plus the data directory and
//! `config.toml` loaders.

pub mod config;
pub mod filesystem;
pub mod tally;
