//! Port trait implementation for `ArgusClient`.
//!
//! This module implements the core-owned `UserClientPort` trait for
//! `ArgusClient`, mapping SDK errors to core port errors.

use argus_core::{PrincipalUser, UserClientPort, UserPortError, UserPortResult};
use async_trait::async_trait;

use crate::client::ArgusClient;
use crate::error::SdkError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `SdkError` to core `UserPortError`.
pub fn map_error(err: SdkError) -> UserPortError {
    match err {
        SdkError::TokenExpired { .. } => UserPortError::TokenExpired,
        SdkError::ApiRequestFailed {
            status, message, ..
        } => UserPortError::Api { status, message },
        SdkError::Unreachable { url, message } => UserPortError::Unreachable {
            message: format!("{url}: {message}"),
        },
        SdkError::Network(e) => UserPortError::Unreachable {
            message: e.to_string(),
        },
        SdkError::InvalidRequest { message } => UserPortError::InvalidRequest { message },
        SdkError::InvalidUrl(e) => UserPortError::Configuration {
            message: e.to_string(),
        },
        SdkError::JsonParse(e) => UserPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> UserClientPort for ArgusClient<B> {
    async fn get_user_by_id(&self, id: u64) -> UserPortResult<PrincipalUser> {
        self.users().get_user_by_id(id).await.map_err(map_error)
    }

    async fn get_user_by_username(&self, username: &str) -> UserPortResult<PrincipalUser> {
        self.users()
            .get_user_by_username(username)
            .await
            .map_err(map_error)
    }
}
