//! Error types for user port operations.

use thiserror::Error;

/// Errors from user port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum UserPortError {
    /// The server could not be reached.
    #[error("Argus server unreachable: {message}")]
    Unreachable {
        /// Description of the transport failure
        message: String,
    },

    /// The access token sent with the request has expired.
    #[error("Access token has expired")]
    TokenExpired,

    /// The server rejected the request.
    #[error("Argus request failed with status {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Server-provided message
        message: String,
    },

    /// The request was rejected before being sent.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// What was wrong with the request
        message: String,
    },

    /// The server answered with a body that is not a user record.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Client configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for user port operations.
pub type UserPortResult<T> = Result<T, UserPortError>;
