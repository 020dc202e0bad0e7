//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from port and SDK errors to exit codes and user-facing messages.

use argus_core::UserPortError;
use argus_sdk::{SdkError, map_error};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The server rejected the request.
    #[error("{0}")]
    Api(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The server could not be reached.
    #[error("{0}")]
    Unreachable(String),

    /// The access token has expired.
    #[error("Access token has expired; obtain a new one and set ARGUS_TOKEN")]
    TokenExpired,

    /// The server answered with something other than the expected document.
    #[error("Unexpected response: {0}")]
    Protocol(String),

    /// Output could not be written.
    #[error("IO error: {0}")]
    Io(String),

    /// A document could not be rendered.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Api(_) => 1,
            Self::Arguments(_) => 2,   // EX_USAGE
            Self::Unreachable(_) => 69, // EX_UNAVAILABLE
            Self::Internal(_) => 70,    // EX_SOFTWARE
            Self::Io(_) => 74,         // EX_IOERR
            Self::Protocol(_) => 76,   // EX_PROTOCOL
            Self::TokenExpired => 77,  // EX_NOPERM
            Self::Config(_) => 78,     // EX_CONFIG
        }
    }
}

impl From<UserPortError> for CliError {
    fn from(err: UserPortError) -> Self {
        match err {
            UserPortError::TokenExpired => Self::TokenExpired,
            UserPortError::Unreachable { .. } => Self::Unreachable(err.to_string()),
            UserPortError::Api { .. } => Self::Api(err.to_string()),
            UserPortError::InvalidRequest { message } => Self::Arguments(message),
            UserPortError::InvalidResponse { message } => Self::Protocol(message),
            UserPortError::Configuration { message } => Self::Config(message),
        }
    }
}

impl From<SdkError> for CliError {
    fn from(err: SdkError) -> Self {
        map_error(err).into()
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
