//! Argus client and endpoint services.
//!
//! This module provides the main client interface for interacting with the
//! Argus web services. Endpoint groups are exposed as lightweight services
//! borrowing the client (see [`ArgusClient::users`]).

mod users;

pub use users::UserService;

use crate::config::ArgusClientConfig;
use crate::error::SdkResult;
use crate::http::{HttpBackend, RequestType, ReqwestBackend};
use crate::validation::{assert_valid_response, from_json};
use serde::de::DeserializeOwned;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Argus client using the reqwest HTTP backend.
pub type DefaultArgusClient = ArgusClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for interacting with the Argus web services.
///
/// This client is generic over an HTTP backend, allowing the HTTP
/// collaborator to be injected. Use `DefaultArgusClient` for production code.
pub struct ArgusClient<B: HttpBackend> {
    pub(crate) backend: B,
}

impl DefaultArgusClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &ArgusClientConfig) -> SdkResult<Self> {
        Ok(Self {
            backend: ReqwestBackend::new(config)?,
        })
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> SdkResult<Self> {
        Self::new(&ArgusClientConfig::default())
    }
}

impl<B: HttpBackend> ArgusClient<B> {
    /// Create a new client over a custom backend.
    pub const fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// User endpoints.
    pub const fn users(&self) -> UserService<'_, B> {
        UserService::new(self)
    }

    /// Issue a GET for `path`, validate the response and decode its body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> SdkResult<T> {
        let response = self.backend.execute(RequestType::Get, path, None).await?;

        assert_valid_response(&response, path)?;
        from_json(&response.result)
    }
}
