//! Past-chat catalog endpoints.
//!
//! GET /api/v1/chats            - all chat summaries, sidebar order
//! GET /api/v1/chats/{chat_id}  - one chat summary

use std::time::Instant;

use axum::extract::{Path, State};

use tallyai_core::chat::catalog::ChatCatalog;
use tallyai_types::chat::{ChatId, ChatSummary};

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/chats
pub async fn list_chats(State(state): State<AppState>) -> ApiResponse<Vec<ChatSummary>> {
    let start = Instant::now();
    ApiResponse::success(state.catalog.list(), start).with_link("self", "/api/v1/chats")
}

/// GET /api/v1/chats/{chat_id}
pub async fn get_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
) -> Result<ApiResponse<ChatSummary>, AppError> {
    let start = Instant::now();
    let chat = state.catalog.get(&ChatId::new(chat_id))?;
    let self_link = format!("/api/v1/chats/{}", chat.id);
    let page = chat.href();

    Ok(ApiResponse::success(chat, start)
        .with_link("self", &self_link)
        .with_link("page", &page))
}
