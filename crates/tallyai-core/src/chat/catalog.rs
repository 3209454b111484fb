//! ChatCatalog trait and the built-in static catalog.
//!
//! The sidebar lists past conversations from a [`ChatCatalog`]. The only
//! implementation is [`StaticChatCatalog`], a fixed list defined once and
//! never mutated.

use tallyai_types::chat::{ChatId, ChatSummary};
use tallyai_types::error::ChatError;

/// Read-only source of past-chat summaries.
///
/// Order of [`ChatCatalog::list`] is the order the sidebar renders.
pub trait ChatCatalog: Send + Sync {
    /// All summaries in display order.
    fn list(&self) -> Vec<ChatSummary>;

    /// Look up one summary by id.
    fn get(&self, id: &ChatId) -> Result<ChatSummary, ChatError> {
        self.list()
            .into_iter()
            .find(|chat| &chat.id == id)
            .ok_or_else(|| ChatError::NotFound(id.to_string()))
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The hard-coded past chats shown in the sidebar.
const PAST_CHATS: [(&str, &str); 3] = [
    ("1", "Fetching Vouchers from United Way"),
    ("2", "GST Form Filing"),
    ("3", "Accounting 101"),
];

/// Catalog backed by an in-memory list fixed at construction.
#[derive(Debug, Clone)]
pub struct StaticChatCatalog {
    chats: Vec<ChatSummary>,
}

impl StaticChatCatalog {
    /// Catalog holding the built-in past chats.
    pub fn new() -> Self {
        Self::from_summaries(
            PAST_CHATS
                .iter()
                .map(|(id, title)| ChatSummary::new(*id, *title))
                .collect(),
        )
    }

    /// Catalog over an explicit list, kept in the given order.
    pub fn from_summaries(chats: Vec<ChatSummary>) -> Self {
        Self { chats }
    }
}

impl Default for StaticChatCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatCatalog for StaticChatCatalog {
    fn list(&self) -> Vec<ChatSummary> {
        self.chats.clone()
    }

    fn get(&self, id: &ChatId) -> Result<ChatSummary, ChatError> {
        self.chats
            .iter()
            .find(|chat| &chat.id == id)
            .cloned()
            .ok_or_else(|| ChatError::NotFound(id.to_string()))
    }

    fn len(&self) -> usize {
        self.chats.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    #[test]
    fn builtin_catalog_has_three_chats_in_order() {
        let catalog = StaticChatCatalog::new();
        let titles: Vec<String> = catalog.list().into_iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec![
                "Fetching Vouchers from United Way",
                "GST Form Filing",
                "Accounting 101",
            ]
        );
    }

    #[test]
    fn builtin_catalog_hrefs() {
        let hrefs: Vec<String> = StaticChatCatalog::new()
            .list()
            .iter()
            .map(ChatSummary::href)
            .collect();
        assert_eq!(hrefs, vec!["/chat/1", "/chat/2", "/chat/3"]);
    }

    #[test]
    fn builtin_catalog_ids_are_unique() {
        let catalog = StaticChatCatalog::new();
        let ids: HashSet<ChatId> = catalog.list().into_iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn get_existing_chat() {
        let catalog = StaticChatCatalog::new();
        let chat = catalog.get(&ChatId::from("2")).unwrap();
        assert_eq!(chat.title, "GST Form Filing");
    }

    #[test]
    fn get_missing_chat_is_not_found() {
        let catalog = StaticChatCatalog::new();
        let err = catalog.get(&ChatId::from("42")).unwrap_err();
        assert!(matches!(err, ChatError::NotFound(id) if id == "42"));
    }

    #[test]
    fn list_is_stable_across_calls() {
        let catalog = StaticChatCatalog::new();
        assert_eq!(catalog.list(), catalog.list());
    }

    #[test]
    fn empty_catalog() {
        let catalog = StaticChatCatalog::from_summaries(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.get(&ChatId::from("1")).is_err());
    }
}
