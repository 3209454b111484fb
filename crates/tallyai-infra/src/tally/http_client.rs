//! TallyHttpClient -- concrete [`TallyTransport`] over HTTP.
//!
//! Tally listens for XML envelopes POSTed to its root (`http://host:9000`).
//! Any status other than 200 is reported as [`TallyError::Http`].

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use tallyai_core::tally::transport::TallyTransport;
use tallyai_types::config::TallyConfig;
use tallyai_types::error::TallyError;

/// HTTP transport to a Tally server.
#[derive(Debug, Clone)]
pub struct TallyHttpClient {
    client: reqwest::Client,
    endpoint: String,
}

impl TallyHttpClient {
    /// Build a client for the endpoint and timeout in `config`.
    pub fn new(config: &TallyConfig) -> Result<Self, TallyError> {
        Self::with_endpoint(config.endpoint(), Duration::from_secs(config.timeout_secs))
    }

    /// Build a client for an explicit endpoint URL (useful for testing).
    pub fn with_endpoint(endpoint: String, timeout: Duration) -> Result<Self, TallyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TallyError::Transport(format!("failed to create http client: {e}")))?;

        Ok(Self { client, endpoint })
    }
}

impl TallyTransport for TallyHttpClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, body: String) -> Result<String, TallyError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .body(body)
            .send()
            .await
            .map_err(|e| TallyError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(endpoint = %self.endpoint, status = status.as_u16(), "tally request failed");
            return Err(TallyError::Http {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| TallyError::Transport(e.to_string()))
    }
}
