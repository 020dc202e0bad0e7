//! User lookup port trait.

use super::error::UserPortResult;
use crate::domain::{PrincipalUser, UserRef};
use async_trait::async_trait;

/// Port trait for looking up users on the Argus service.
///
/// # Design
///
/// - One request per call, no retries
/// - Returns `UserPortError` for all failures
/// - No HTTP details leak through this interface
#[async_trait]
pub trait UserClientPort: Send + Sync {
    /// Fetch the user with the given numeric ID.
    async fn get_user_by_id(&self, id: u64) -> UserPortResult<PrincipalUser>;

    /// Fetch the user with the given username.
    async fn get_user_by_username(&self, username: &str) -> UserPortResult<PrincipalUser>;

    /// Fetch a user by either identifier.
    async fn get_user(&self, user: &UserRef) -> UserPortResult<PrincipalUser> {
        match user {
            UserRef::Id(id) => self.get_user_by_id(*id).await,
            UserRef::Username(username) => self.get_user_by_username(username).await,
        }
    }
}
