//! Error types for Argus SDK operations.
//!
//! Port implementations map these to [`argus_core::UserPortError`] at the
//! boundary.

use thiserror::Error;

/// Result type alias for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

/// Errors related to Argus API operations.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The server answered with a non-success status.
    #[error("Argus request to {path} failed with status {status}: {message}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The resource path that was requested
        path: String,
        /// Server-provided message
        message: String,
    },

    /// The server reported that the access token has expired.
    #[error("Access token expired while requesting {path}")]
    TokenExpired {
        /// The resource path that was requested
        path: String,
    },

    /// The request could not be delivered to the server.
    #[error("Could not reach Argus at {url}: {message}")]
    Unreachable {
        /// The URL that was requested
        url: String,
        /// Description of the transport failure
        message: String,
    },

    /// The request was rejected locally before being sent.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// What was wrong with the request
        message: String,
    },

    /// Network or HTTP client error outside of request delivery.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
