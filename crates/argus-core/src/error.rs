//! Core error type.

use thiserror::Error;

/// Message reported when a conversion is handed a missing entity or list.
pub const NULL_ENTITY_MESSAGE: &str = "Null entity object cannot be converted to Dto object.";

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes, CLI exit
/// codes) using [`CoreError::status_hint`].
#[derive(Debug, Error)]
pub enum CoreError {
    /// A programming error detected at an API boundary.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the violated precondition
        message: String,
    },
}

impl CoreError {
    /// Error raised when a conversion receives no input.
    #[must_use]
    pub fn null_entity() -> Self {
        Self::Internal {
            message: NULL_ENTITY_MESSAGE.to_string(),
        }
    }

    /// HTTP status an outer service boundary should report for this error.
    pub const fn status_hint(&self) -> u16 {
        match self {
            Self::Internal { .. } => 500,
        }
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
