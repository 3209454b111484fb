//! View model for the chat page and its sidebar.
//!
//! [`ChatPageView`] carries every string the templates render. It is built
//! from a [`ChatCatalog`] alone: the route's chat id is not an input, so
//! `/` and `/chat/{chat_id}` always produce the same view.

use serde::Serialize;

use super::catalog::ChatCatalog;

/// Placeholder shown in the message log. The log never holds anything else.
pub const EMPTY_LOG_TEXT: &str = "No messages yet. Start typing below!";

pub const PAGE_HEADER: &str = "Chat Interface";
pub const SIDEBAR_HEADING: &str = "Past Chats";
pub const NEW_CHAT_LABEL: &str = "+ New Chat";
pub const INPUT_PLACEHOLDER: &str = "Type your message...";
pub const SEND_LABEL: &str = "Send";

/// Id of the host element the page is rendered into.
pub const ROOT_ELEMENT_ID: &str = "root";

/// A sidebar navigation entry.
///
/// Templates build the link as `/chat/{id}`: HTML auto-escaping would
/// rewrite the `/` of a pre-assembled href, so only the id is interpolated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarLink {
    pub id: String,
    pub title: String,
}

/// Sidebar section of the page.
#[derive(Debug, Clone, Serialize)]
pub struct SidebarView {
    pub heading: &'static str,
    pub links: Vec<SidebarLink>,
    pub new_chat_label: &'static str,
}

/// Everything the chat page template needs.
#[derive(Debug, Clone, Serialize)]
pub struct ChatPageView {
    pub app_title: &'static str,
    pub root_id: &'static str,
    pub header: &'static str,
    pub empty_log: &'static str,
    pub input_placeholder: &'static str,
    pub send_label: &'static str,
    pub sidebar: SidebarView,
}

impl ChatPageView {
    pub fn build<C: ChatCatalog + ?Sized>(catalog: &C) -> Self {
        let links = catalog
            .list()
            .iter()
            .map(|chat| SidebarLink {
                id: chat.id.to_string(),
                title: chat.title.clone(),
            })
            .collect();

        Self {
            app_title: "TallyAI",
            root_id: ROOT_ELEMENT_ID,
            header: PAGE_HEADER,
            empty_log: EMPTY_LOG_TEXT,
            input_placeholder: INPUT_PLACEHOLDER,
            send_label: SEND_LABEL,
            sidebar: SidebarView {
                heading: SIDEBAR_HEADING,
                links,
                new_chat_label: NEW_CHAT_LABEL,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::catalog::StaticChatCatalog;

    #[test]
    fn sidebar_links_follow_catalog_order() {
        let view = ChatPageView::build(&StaticChatCatalog::new());
        let links: Vec<(&str, &str)> = view
            .sidebar
            .links
            .iter()
            .map(|l| (l.id.as_str(), l.title.as_str()))
            .collect();
        assert_eq!(
            links,
            vec![
                ("1", "Fetching Vouchers from United Way"),
                ("2", "GST Form Filing"),
                ("3", "Accounting 101"),
            ]
        );
    }

    #[test]
    fn view_carries_fixed_labels() {
        let view = ChatPageView::build(&StaticChatCatalog::new());
        assert_eq!(view.empty_log, "No messages yet. Start typing below!");
        assert_eq!(view.header, "Chat Interface");
        assert_eq!(view.sidebar.new_chat_label, "+ New Chat");
        assert_eq!(view.root_id, "root");
    }
}
