//! Identity and audit fields shared by persisted entities and their DTOs.
//!
//! Every Argus entity carries the same five fields. Instead of a common base
//! type, each entity embeds an [`AuditFields`] value and implements
//! [`HasAuditFields`] to expose it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity and audit metadata of a persisted entity.
///
/// Dates travel as epoch milliseconds on the wire. All fields are optional
/// because entities that have not been persisted yet carry none of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditFields {
    /// Entity ID assigned by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// ID of the user that created the entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_id: Option<u64>,
    /// Creation timestamp.
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_date: Option<DateTime<Utc>>,
    /// ID of the user that last modified the entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by_id: Option<u64>,
    /// Last modification timestamp.
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_date: Option<DateTime<Utc>>,
}

impl AuditFields {
    /// Create audit fields carrying only an entity ID.
    #[must_use]
    pub fn with_id(id: u64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}

/// Capability of types that carry [`AuditFields`].
pub trait HasAuditFields {
    /// Borrow the audit fields.
    fn audit(&self) -> &AuditFields;

    /// Mutably borrow the audit fields.
    fn audit_mut(&mut self) -> &mut AuditFields;

    /// Identifier of the record.
    fn id(&self) -> Option<u64> {
        self.audit().id
    }

    /// ID of the user who created the record.
    fn created_by_id(&self) -> Option<u64> {
        self.audit().created_by_id
    }

    /// When the record was created.
    fn created_date(&self) -> Option<DateTime<Utc>> {
        self.audit().created_date
    }

    /// ID of the user who last modified the record.
    fn modified_by_id(&self) -> Option<u64> {
        self.audit().modified_by_id
    }

    /// When the record was last modified.
    fn modified_date(&self) -> Option<DateTime<Utc>> {
        self.audit().modified_date
    }

    /// Overwrite this value's audit fields with a copy of `other`'s.
    fn copy_audit_from<T: HasAuditFields + ?Sized>(&mut self, other: &T) {
        *self.audit_mut() = other.audit().clone();
    }
}
