//! Axum router configuration with middleware.
//!
//! Pages: `/` and `/chat/{chat_id}` render the same chat page.
//! JSON API under `/api/v1/`, companion endpoints under `/companion`.
//! Middleware: CORS, request tracing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let pages = Router::new()
        .route("/", get(handlers::pages::index))
        .route("/chat/{chat_id}", get(handlers::pages::chat))
        .route("/chat/{chat_id}/", get(handlers::pages::chat));

    let api_routes = Router::new()
        .route("/chats", get(handlers::chat::list_chats))
        .route("/chats/{chat_id}", get(handlers::chat::get_chat))
        .route("/tally/status", get(handlers::tally::status));

    let companion = Router::new()
        .route("/", get(handlers::companion::hello))
        .route("/xml", get(handlers::companion::note_xml))
        .route("/post", post(handlers::companion::receive_xml));

    Router::new()
        .merge(pages)
        .nest("/api/v1", api_routes)
        .nest("/companion", companion)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use tallyai_types::config::{GlobalConfig, TallyConfig};

    const EMPTY_LOG: &str = "No messages yet. Start typing below!";

    fn app_with(tally: TallyConfig) -> Router {
        let config = GlobalConfig {
            tally,
            ..GlobalConfig::default()
        };
        build_router(AppState::new(config, PathBuf::from("/tmp/tallyai-test")).unwrap())
    }

    fn app() -> Router {
        // Port 1 is never listening; nothing in these tests should reach it.
        app_with(TallyConfig {
            url: "http://127.0.0.1".to_string(),
            port: 1,
            timeout_secs: 2,
        })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        send(app, Request::get(uri).body(Body::empty()).unwrap()).await
    }

    fn between<'a>(html: &'a str, start: &str, end: &str) -> &'a str {
        let from = html.find(start).unwrap() + start.len();
        let to = from + html[from..].find(end).unwrap();
        &html[from..to]
    }

    #[tokio::test]
    async fn index_renders_empty_log() {
        let (status, html) = get(app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(EMPTY_LOG));
        assert!(html.contains("<h1>Chat Interface</h1>"));
    }

    #[tokio::test]
    async fn chat_route_ignores_chat_id() {
        let (_, index) = get(app(), "/").await;
        for uri in [
            "/chat/42",
            "/chat/1",
            "/chat/not-a-real-chat",
            "/chat/42/",
            "/chat/%FF",
            "/chat/a%2Fb",
        ] {
            let (status, html) = get(app(), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(html, index, "{uri}");
        }
    }

    #[tokio::test]
    async fn sidebar_lists_three_chats_in_order() {
        let (_, html) = get(app(), "/").await;
        assert_eq!(html.matches("<a ").count(), 3);

        let nav = between(&html, "<nav>", "</nav>");
        let expected = [
            ("/chat/1", "Fetching Vouchers from United Way"),
            ("/chat/2", "GST Form Filing"),
            ("/chat/3", "Accounting 101"),
        ];
        let mut cursor = 0;
        for (href, title) in expected {
            let anchor = format!(r#"<a href="{href}">{title}</a>"#);
            let pos = nav[cursor..]
                .find(&anchor)
                .unwrap_or_else(|| panic!("missing or out of order: {anchor}"));
            cursor += pos + anchor.len();
        }
    }

    #[tokio::test]
    async fn controls_are_inert() {
        let (_, html) = get(app(), "/").await;
        assert!(!html.contains("<form"));
        assert!(!html.contains("onclick"));
        assert!(!html.contains("<script"));
        assert!(html.contains(r#"<button type="button" class="new-chat">+ New Chat</button>"#));
        assert!(html.contains(r#"<button type="button" class="send">Send</button>"#));

        let input = between(&html, "<input", ">");
        assert!(!input.contains("name="));
        assert!(!input.contains("value="));
        assert!(input.contains(r#"placeholder="Type your message...""#));
    }

    #[tokio::test]
    async fn log_contains_only_placeholder() {
        let (_, html) = get(app(), "/chat/7").await;
        let log = between(&html, r#"<div class="message-log">"#, r#"<div class="input-row">"#);
        assert!(log.contains(EMPTY_LOG));
        assert_eq!(log.matches("<div").count(), 1);
    }

    #[tokio::test]
    async fn pages_are_html() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let (status, _) = get(app(), "/settings").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn health_reports_version() {
        let (status, body) = get(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn api_lists_chats() {
        let (status, body) = get(app(), "/api/v1/chats").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let ids: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(json["_links"]["self"], "/api/v1/chats");
    }

    #[tokio::test]
    async fn api_get_chat() {
        let (status, body) = get(app(), "/api/v1/chats/3").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["data"]["title"], "Accounting 101");
        assert_eq!(json["_links"]["self"], "/api/v1/chats/3");
        assert_eq!(json["_links"]["page"], "/chat/3");
    }

    #[tokio::test]
    async fn api_missing_chat_is_404() {
        let (status, body) = get(app(), "/api/v1/chats/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["errors"][0]["code"], "CHAT_NOT_FOUND");
    }

    #[tokio::test]
    async fn tally_status_reachable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let app = app_with(TallyConfig {
            url: "http://127.0.0.1".to_string(),
            port: server.address().port(),
            timeout_secs: 5,
        });
        let (status, body) = get(app, "/api/v1/tally/status").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["data"]["reachable"], true);
        assert_eq!(
            json["data"]["endpoint"],
            format!("http://127.0.0.1:{}", server.address().port())
        );
    }

    #[tokio::test]
    async fn tally_status_unreachable() {
        let (status, body) = get(app(), "/api/v1/tally/status").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["data"]["reachable"], false);
    }

    #[tokio::test]
    async fn companion_hello_and_note() {
        let (status, body) = get(app(), "/companion").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"message":"Hello World"}"#);

        let response = app()
            .oneshot(Request::get("/companion/xml").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/xml");
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("<heading>Reminder</heading>"));
    }

    #[tokio::test]
    async fn companion_accepts_xml_post() {
        let request = Request::post("/companion/post")
            .header(header::CONTENT_TYPE, "application/xml")
            .body(Body::from("<ENVELOPE><ID>1</ID></ENVELOPE>"))
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"message":"XML data received"}"#);
    }

    #[tokio::test]
    async fn companion_rejects_non_utf8() {
        let request = Request::post("/companion/post")
            .body(Body::from(vec![0xff, 0xfe, 0x00]))
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("VALIDATION_ERROR"));
    }
}
