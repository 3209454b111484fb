//! HTTP layer for TallyAI.
//!
//! Server-rendered chat pages at `/` and `/chat/{chat_id}`, a JSON API at
//! `/api/v1/` using the envelope response format, and the companion
//! endpoints under `/companion`.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod views;
