//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use tallyai_types::error::{ChatError, TallyError};

use super::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    Chat(ChatError),
    Tally(TallyError),
    /// Malformed client input.
    Validation(String),
    Internal(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl From<TallyError> for AppError {
    fn from(e: TallyError) -> Self {
        AppError::Tally(e)
    }
}

impl From<minijinja::Error> for AppError {
    fn from(e: minijinja::Error) -> Self {
        AppError::Internal(format!("template error: {e}"))
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Chat(ChatError::NotFound(id)) => (
                StatusCode::NOT_FOUND,
                "CHAT_NOT_FOUND",
                format!("Chat '{id}' not found"),
            ),
            AppError::Tally(TallyError::InvalidRequest(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Tally(TallyError::Http { status }) => (
                StatusCode::BAD_GATEWAY,
                "TALLY_HTTP_ERROR",
                format!("Tally server returned HTTP {status}"),
            ),
            AppError::Tally(e @ TallyError::Transport(_)) => {
                (StatusCode::BAD_GATEWAY, "TALLY_UNAVAILABLE", e.to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        if status.is_server_error() {
            tracing::error!(code, "{message}");
        }

        let mut response = ApiResponse::error(code, &message).into_response();
        *response.status_mut() = status;
        response
    }
}
