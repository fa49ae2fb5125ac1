//! HTTP execution of built requests.

use std::borrow::Cow;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use thiserror::Error;
use tracing::debug;

use super::request::BuiltRequest;
use crate::core::config::ApiConfig;

/// Status and body of a remote response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Body bytes are taken as UTF-8 (JSON's only encoding). Invalid
    /// sequences become U+FFFD; every valid byte is kept.
    pub fn from_bytes(status: u16, bytes: &[u8]) -> Self {
        let body = match String::from_utf8_lossy(bytes) {
            Cow::Borrowed(text) => text.to_string(),
            Cow::Owned(text) => {
                debug!(status, "Response body is not valid UTF-8");
                text
            }
        };
        Self { status, body }
    }
}

/// Failures while talking to the remote API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to create request")]
    InvalidRequest(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Request failed")]
    Request(#[source] reqwest::Error),

    #[error("Failed to read response body")]
    Body(#[source] reqwest::Error),
}

impl ClientError {
    /// Text of the underlying cause.
    pub fn cause(&self) -> String {
        match self {
            Self::InvalidRequest(source) => source.to_string(),
            Self::Request(source) | Self::Body(source) => source.to_string(),
        }
    }
}

/// Executes built requests. One call, no retries.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn execute(&self, request: &BuiltRequest) -> Result<RawResponse, ClientError>;
}

/// [`ApiClient`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    http: reqwest::Client,
}

impl ReqwestApiClient {
    /// Build the client with the configured timeout.
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl ApiClient for ReqwestApiClient {
    async fn execute(&self, request: &BuiltRequest) -> Result<RawResponse, ClientError> {
        let url = reqwest::Url::parse(&request.url)
            .map_err(|e| ClientError::InvalidRequest(Box::new(e)))?;

        let mut builder = self
            .http
            .request(request.method.into(), url)
            .header(USER_AGENT, concat!("wordnik-mcp-server/", env!("CARGO_PKG_VERSION")));
        for (name, value) in &request.headers {
            builder = builder.header(*name, *value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(ClientError::Request)?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(ClientError::Body)?;

        debug!(status, bytes = bytes.len(), "Received API response");
        Ok(RawResponse::from_bytes(status, &bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_body_kept_intact() {
        let response = RawResponse::from_bytes(200, "{\"word\":\"café\"}".as_bytes());
        assert_eq!(response, RawResponse::new(200, "{\"word\":\"café\"}"));
    }

    #[test]
    fn test_invalid_utf8_replaced_not_dropped() {
        let response = RawResponse::from_bytes(502, &[b'o', 0xff, b'k']);
        assert_eq!(response.status, 502);
        assert_eq!(response.body, "o\u{FFFD}k");
    }
}
