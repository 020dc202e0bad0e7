//! Principal user types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::audit::{AuditFields, HasAuditFields};

/// The authenticated identity record returned by the user lookup endpoints.
///
/// Instances are built by decoding a server response and are not modified
/// afterwards. Unknown JSON fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalUser {
    #[serde(flatten)]
    pub audit: AuditFields,
    /// Unique login name.
    pub user_name: String,
    /// Contact email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Whether the user holds administrative privileges.
    #[serde(default)]
    pub privileged: bool,
    /// IDs of the dashboards owned by this user.
    #[serde(default)]
    pub owned_dashboards: Vec<u64>,
    /// Free-form user preferences.
    #[serde(default)]
    pub preferences: BTreeMap<String, String>,
}

impl PrincipalUser {
    /// Create a user with only a username set.
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            ..Self::default()
        }
    }
}

impl HasAuditFields for PrincipalUser {
    fn audit(&self) -> &AuditFields {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut AuditFields {
        &mut self.audit
    }
}

/// Reference to a user, either by numeric ID or by username.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserRef {
    /// Look the user up by ID.
    Id(u64),
    /// Look the user up by username.
    Username(String),
}

impl fmt::Display for UserRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {id}"),
            Self::Username(name) => write!(f, "username '{name}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_server_payload() {
        let json = r#"{
            "id": 42,
            "createdById": 1,
            "createdDate": 1472847819167,
            "modifiedById": 1,
            "modifiedDate": 1472847819167,
            "userName": "jdoe",
            "email": "jdoe@example.com",
            "privileged": true,
            "ownedDashboards": [3, 9],
            "preferences": {"theme": "dark"},
            "someFutureField": {"nested": true}
        }"#;

        let user: PrincipalUser = serde_json::from_str(json).unwrap();

        assert_eq!(user.id(), Some(42));
        assert_eq!(user.created_by_id(), Some(1));
        assert!(user.created_date().is_some());
        assert_eq!(user.user_name, "jdoe");
        assert_eq!(user.email.as_deref(), Some("jdoe@example.com"));
        assert!(user.privileged);
        assert_eq!(user.owned_dashboards, vec![3, 9]);
        assert_eq!(user.preferences.get("theme").map(String::as_str), Some("dark"));
    }

    #[test]
    fn test_minimal_payload_uses_defaults() {
        let user: PrincipalUser = serde_json::from_str(r#"{"userName": "admin"}"#).unwrap();

        assert_eq!(user, PrincipalUser::new("admin"));
        assert!(user.id().is_none());
        assert!(!user.privileged);
        assert!(user.owned_dashboards.is_empty());
    }

    #[test]
    fn test_missing_username_is_rejected() {
        let result: Result<PrincipalUser, _> = serde_json::from_str(r#"{"id": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_user_ref_display() {
        assert_eq!(UserRef::Id(5).to_string(), "id 5");
        assert_eq!(
            UserRef::Username("jdoe".to_string()).to_string(),
            "username 'jdoe'"
        );
    }
}
