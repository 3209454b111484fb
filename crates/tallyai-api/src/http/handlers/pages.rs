//! Chat page handlers.
//!
//! GET /                - chat page
//! GET /chat/{chat_id}  - the same chat page; the id is accepted and ignored
//!
//! The id is never extracted, so ids that do not decode to UTF-8 still
//! render the page.

use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;

use tallyai_core::chat::page::ChatPageView;

use crate::http::error::AppError;
use crate::state::AppState;

/// GET / - render the chat page.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_chat_page(&state)
}

/// GET /chat/{chat_id} - render the chat page for any chat id.
pub async fn chat(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    tracing::debug!(path = uri.path(), "rendering chat page");
    render_chat_page(&state)
}

fn render_chat_page(state: &AppState) -> Result<Html<String>, AppError> {
    let view = ChatPageView::build(state.catalog.as_ref());
    Ok(Html(state.pages.chat_page(&view)?))
}
