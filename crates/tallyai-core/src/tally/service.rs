//! TallyService -- typed operations over a [`TallyTransport`].

use tallyai_types::error::TallyError;

use super::envelope::Envelope;
use super::requests;
use super::transport::TallyTransport;

/// Typed facade for the Tally server.
///
/// Generic over `T: TallyTransport` so tests can substitute an in-memory
/// transport. Responses are returned as raw XML strings.
pub struct TallyService<T: TallyTransport> {
    transport: T,
}

impl<T: TallyTransport> TallyService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }

    /// Render and send an arbitrary envelope.
    pub async fn send(&self, envelope: &Envelope) -> Result<String, TallyError> {
        let body = envelope.to_xml()?;
        tracing::debug!(
            endpoint = self.transport.endpoint(),
            request_id = envelope.id(),
            "sending tally request"
        );
        self.transport.send(body).await
    }

    /// Post an empty body; `true` only when the server answers HTTP 200.
    pub async fn test_connection(&self) -> bool {
        match self.transport.send(String::new()).await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(endpoint = self.transport.endpoint(), "tally unreachable: {e}");
                false
            }
        }
    }

    pub async fn current_company(&self) -> Result<String, TallyError> {
        self.send(&requests::current_company()).await
    }

    pub async fn sales_vouchers(&self) -> Result<String, TallyError> {
        self.send(&requests::sales_vouchers()).await
    }

    pub async fn companies(&self, include_simple_companies: bool) -> Result<String, TallyError> {
        self.send(&requests::companies(include_simple_companies)).await
    }

    pub async fn ledgers(&self, company: Option<&str>) -> Result<String, TallyError> {
        self.send(&requests::ledgers(company)).await
    }

    pub async fn stock_items(&self) -> Result<String, TallyError> {
        self.send(&requests::stock_items()).await
    }

    pub async fn execute(&self, function: &str, params: &[String]) -> Result<String, TallyError> {
        self.send(&requests::tdl_function(function, params.iter().cloned()))
            .await
    }
}
