//! Companion endpoints for exercising XML exchange with external tools.
//!
//! GET  /companion       - liveness greeting
//! GET  /companion/xml   - a fixed XML note
//! POST /companion/post  - accept and log a raw XML body

use axum::body::Bytes;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

use crate::http::error::AppError;

/// Sample document served by [`note_xml`].
pub const NOTE_XML: &str = r#"<note>
    <to>User</to>
    <from>TallyAI</from>
    <heading>Reminder</heading>
    <body>This is an XML response!</body>
</note>
"#;

/// GET /companion
pub async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

/// GET /companion/xml
pub async fn note_xml() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/xml")], NOTE_XML)
}

/// POST /companion/post - body must be UTF-8.
pub async fn receive_xml(body: Bytes) -> Result<Json<Value>, AppError> {
    let xml = std::str::from_utf8(&body)
        .map_err(|e| AppError::Validation(format!("body is not valid UTF-8: {e}")))?;

    tracing::info!(bytes = body.len(), "received XML:\n{xml}");

    Ok(Json(json!({ "message": "XML data received" })))
}
