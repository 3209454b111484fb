//! TallyTransport trait definition.
//!
//! Follows the RPITIT pattern: native async fn in traits, implementations
//! live in tallyai-infra (e.g., `TallyHttpClient`).

use tallyai_types::error::TallyError;

/// Delivers a rendered XML request to a Tally server and returns the raw
/// response body.
pub trait TallyTransport: Send + Sync {
    /// Where requests are sent, for logs and status output.
    fn endpoint(&self) -> &str;

    /// Post `body` and return the response text.
    ///
    /// Only a successful (HTTP 200) answer is `Ok`; anything else maps to
    /// [`TallyError::Http`] or [`TallyError::Transport`].
    fn send(
        &self,
        body: String,
    ) -> impl std::future::Future<Output = Result<String, TallyError>> + Send;
}
