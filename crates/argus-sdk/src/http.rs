//! HTTP backend abstraction for the Argus API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and performs exactly one attempt per request.

use crate::config::ArgusClientConfig;
use crate::error::{SdkError, SdkResult};
use crate::url::build_request_url;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;
use url::Url;

#[cfg(test)]
use mockall::automock;

// ============================================================================
// Request / Response
// ============================================================================

/// HTTP method of an Argus request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestType {
    Get,
    Post,
    Put,
    Delete,
}

impl RequestType {
    /// The method name as sent on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl From<RequestType> for reqwest::Method {
    fn from(value: RequestType) -> Self {
        match value {
            RequestType::Get => Self::GET,
            RequestType::Post => Self::POST,
            RequestType::Put => Self::PUT,
            RequestType::Delete => Self::DELETE,
        }
    }
}

/// Raw outcome of an Argus request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgusResponse {
    /// HTTP status code
    pub status: u16,
    /// Status reason phrase, when the transport provides one
    pub message: Option<String>,
    /// Response body
    pub result: String,
}

impl ArgusResponse {
    /// Create a response with the given status and body.
    pub fn new(status: u16, result: impl Into<String>) -> Self {
        Self {
            status,
            message: None,
            result: result.into(),
        }
    }

    /// Attach a status reason phrase.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Whether the status is in the 2xx range.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// The HTTP collaborator used by the Argus client.
///
/// Implementations resolve `path` against their base URL, send `body` as
/// JSON when present, and report the status and body of the response
/// without interpreting them. Only failures to complete the exchange are
/// returned as errors.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Execute a single request.
    async fn execute(
        &self,
        method: RequestType,
        path: &str,
        body: Option<String>,
    ) -> SdkResult<ArgusResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ArgusClientConfig) -> SdkResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: config.token.clone(),
        })
    }

    /// Build a request with JSON headers and optional authentication.
    fn build_request(
        &self,
        method: RequestType,
        url: &Url,
        body: Option<String>,
    ) -> reqwest::RequestBuilder {
        let mut request = self
            .client
            .request(method.into(), url.as_str())
            .header(ACCEPT, "application/json");
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }
        request
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn execute(
        &self,
        method: RequestType,
        path: &str,
        body: Option<String>,
    ) -> SdkResult<ArgusResponse> {
        let url = build_request_url(&self.base_url, path);
        debug!(method = method.as_str(), %url, "Sending Argus request");

        let response = self
            .build_request(method, &url, body)
            .send()
            .await
            .map_err(|e| SdkError::Unreachable {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        let message = status.canonical_reason().map(ToString::to_string);
        let result = response.text().await?;

        debug!(status = status.as_u16(), %url, "Received Argus response");
        Ok(ArgusResponse {
            status: status.as_u16(),
            message,
            result,
        })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
