//! Tally connectivity endpoint.
//!
//! GET /api/v1/tally/status - whether the configured Tally server answers

use std::time::Instant;

use axum::extract::State;
use serde::Serialize;

use crate::http::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TallyStatus {
    pub endpoint: String,
    pub reachable: bool,
}

/// GET /api/v1/tally/status
pub async fn status(State(state): State<AppState>) -> ApiResponse<TallyStatus> {
    let start = Instant::now();
    let reachable = state.tally.test_connection().await;

    let status = TallyStatus {
        endpoint: state.tally.endpoint().to_string(),
        reachable,
    };
    ApiResponse::success(status, start).with_link("self", "/api/v1/tally/status")
}
