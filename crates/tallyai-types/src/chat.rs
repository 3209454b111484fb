//! Chat summary types for TallyAI.
//!
//! A [`ChatSummary`] is the minimal record identifying a past conversation:
//! an opaque id and a display title. No message content is modeled.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Opaque chat identifier as it appears in `/chat/{chat_id}` routes.
///
/// Never validated or parsed; any string is a valid id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(String);

impl ChatId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChatId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ChatId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A past conversation shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub id: ChatId,
    pub title: String,
}

impl ChatSummary {
    pub fn new(id: impl Into<ChatId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Navigation target for this chat: `/chat/{id}`.
    pub fn href(&self) -> String {
        format!("/chat/{}", self.id)
    }
}
