//! Dashboard DTO.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::example::Exemplifiable;
use crate::domain::{AuditFields, Dashboard, HasAuditFields, LayoutType, TemplateVar};
use crate::error::{CoreError, CoreResult};

/// Wire representation of a [`Dashboard`].
///
/// The owner is flattened to its username. Template variables are owned by
/// the DTO and only ever replaced in place through
/// [`DashboardDto::set_template_vars`], so [`DashboardDto::template_vars`]
/// never observes a missing list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    #[serde(flatten)]
    pub audit: AuditFields,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub shared: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub layout: Option<LayoutType>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    template_vars: Vec<TemplateVar>,
}

impl DashboardDto {
    /// Convert a dashboard entity to its DTO.
    ///
    /// Fails with [`CoreError::Internal`] when no entity is given.
    pub fn transform_to_dto(dashboard: Option<&Dashboard>) -> CoreResult<Self> {
        dashboard.map(Self::from).ok_or_else(CoreError::null_entity)
    }

    /// Convert a list of dashboard entities, preserving order.
    ///
    /// Fails with [`CoreError::Internal`] when no list is given. An empty
    /// list converts to an empty list.
    pub fn transform_list_to_dto(dashboards: Option<&[Dashboard]>) -> CoreResult<Vec<Self>> {
        let dashboards = dashboards.ok_or_else(CoreError::null_entity)?;
        Ok(dashboards.iter().map(Self::from).collect())
    }

    /// Template variables used by this dashboard.
    pub fn template_vars(&self) -> &[TemplateVar] {
        &self.template_vars
    }

    /// Replace the template variables.
    ///
    /// Existing variables are cleared first; `None` or an empty slice leaves
    /// the list empty.
    pub fn set_template_vars(&mut self, template_vars: Option<&[TemplateVar]>) {
        self.template_vars.clear();
        if let Some(vars) = template_vars {
            self.template_vars.extend_from_slice(vars);
        }
    }

    /// Build the documentation example with the given timestamp.
    ///
    /// [`Exemplifiable::create_example`] calls this with the current time.
    #[must_use]
    pub fn create_example_at(now: DateTime<Utc>) -> Self {
        Self {
            audit: AuditFields {
                id: Some(1),
                created_by_id: Some(1),
                created_date: Some(now),
                modified_by_id: Some(10),
                modified_date: Some(now),
            },
            name: "example-dashboard".to_string(),
            owner_name: "admin".to_string(),
            shared: false,
            description: Some("a description of the dashboard.".to_string()),
            ..Self::default()
        }
    }
}

impl From<&Dashboard> for DashboardDto {
    fn from(dashboard: &Dashboard) -> Self {
        let mut dto = Self {
            audit: AuditFields::default(),
            name: dashboard.name.clone(),
            content: dashboard.content.clone(),
            owner_name: dashboard.owner.user_name.clone(),
            shared: dashboard.shared,
            description: dashboard.description.clone(),
            layout: Some(dashboard.layout),
            version: dashboard.version.clone(),
            template_vars: Vec::with_capacity(dashboard.template_vars.len()),
        };
        dto.copy_audit_from(dashboard);
        dto.set_template_vars(Some(dashboard.template_vars.as_slice()));
        dto
    }
}

impl HasAuditFields for DashboardDto {
    fn audit(&self) -> &AuditFields {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut AuditFields {
        &mut self.audit
    }
}

impl Exemplifiable for DashboardDto {
    fn create_example() -> Self {
        Self::create_example_at(Utc::now())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<TemplateVar>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<TemplateVar>>::deserialize(deserializer)?.unwrap_or_default())
}
