//! Shared domain types for TallyAI.
//!
//! This crate contains the types used across the TallyAI workspace:
//! chat summaries, Tally request descriptors, global configuration and
//! their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod tally;
