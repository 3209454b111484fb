//! HTTP request handlers.

pub mod chat;
pub mod companion;
pub mod pages;
pub mod tally;
