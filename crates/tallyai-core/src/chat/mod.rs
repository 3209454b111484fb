//! Past-chat catalog and the chat page view model.

pub mod catalog;
pub mod page;
