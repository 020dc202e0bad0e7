//! Dashboard domain types.
//!
//! These types represent dashboards as they are persisted by the Argus
//! service. The wire representation is [`crate::dto::DashboardDto`].

use serde::{Deserialize, Serialize};

use super::audit::{AuditFields, HasAuditFields};
use super::user::PrincipalUser;

/// Grid size used when rendering a dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LayoutType {
    #[default]
    Small,
    Medium,
    Large,
}

/// A named placeholder substituted into dashboard content at render time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateVar {
    /// Placeholder name as referenced from the dashboard content.
    pub key: String,
    /// Value substituted for the placeholder.
    pub value: String,
}

impl TemplateVar {
    /// Create a new template variable.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A persisted dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(flatten)]
    pub audit: AuditFields,
    /// Dashboard name, unique per owner.
    pub name: String,
    /// Opaque dashboard markup.
    pub content: Option<String>,
    /// User that owns the dashboard.
    pub owner: PrincipalUser,
    /// Whether other users can see the dashboard.
    pub shared: bool,
    /// Free-form description.
    pub description: Option<String>,
    /// Rendering layout.
    pub layout: LayoutType,
    /// Dashboard format version.
    pub version: Option<String>,
    /// Template variables, in declaration order.
    pub template_vars: Vec<TemplateVar>,
}

impl Dashboard {
    /// Create an unshared dashboard with the given name and owner.
    ///
    /// Other fields are set to `None` or empty defaults.
    pub fn new(name: impl Into<String>, owner: PrincipalUser) -> Self {
        Self {
            audit: AuditFields::default(),
            name: name.into(),
            content: None,
            owner,
            shared: false,
            description: None,
            layout: LayoutType::default(),
            version: None,
            template_vars: Vec::new(),
        }
    }
}

impl HasAuditFields for Dashboard {
    fn audit(&self) -> &AuditFields {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut AuditFields {
        &mut self.audit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dashboard_defaults() {
        let dashboard = Dashboard::new("cpu", PrincipalUser::new("jdoe"));

        assert_eq!(dashboard.name, "cpu");
        assert_eq!(dashboard.owner.user_name, "jdoe");
        assert!(!dashboard.shared);
        assert_eq!(dashboard.layout, LayoutType::Small);
        assert!(dashboard.template_vars.is_empty());
        assert!(dashboard.id().is_none());
    }

    #[test]
    fn test_layout_type_wire_names() {
        assert_eq!(serde_json::to_value(LayoutType::Small).unwrap(), "SMALL");
        assert_eq!(serde_json::to_value(LayoutType::Medium).unwrap(), "MEDIUM");
        assert_eq!(serde_json::to_value(LayoutType::Large).unwrap(), "LARGE");

        let parsed: LayoutType = serde_json::from_str(r#""LARGE""#).unwrap();
        assert_eq!(parsed, LayoutType::Large);
        assert!(serde_json::from_str::<LayoutType>(r#""large""#).is_err());
    }
}
