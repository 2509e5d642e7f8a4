//! HTTP transport used by the job client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::warn;

use crate::error::TransportError;

/// Per-request timeout for the reqwest transport.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Empty when the body of a non-2xx response could not be read.
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for delivering a JSON payload to the API.
///
/// This abstraction allows mocking the network in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` as JSON to `url` with a bearer `token`.
    async fn post_json(
        &self,
        url: &str,
        token: &str,
        body: &str,
    ) -> Result<HttpResponse, TransportError>;
}

/// Default transport backed by reqwest.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("docjob/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| TransportError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        token: &str,
        body: &str,
    ) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            // A non-2xx status is classified on its own.
            Err(e) if !status.is_success() => {
                warn!(%status, "Failed to read error response body: {}", e);
                String::new()
            }
            Err(e) => return Err(TransportError::ReadBody(e.to_string())),
        };

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}
