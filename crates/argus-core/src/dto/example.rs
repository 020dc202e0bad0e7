//! Documentation example generation.

use serde::Serialize;
use serde_json::Value;

use crate::domain::{AuditFields, PrincipalUser};

/// Capability of wire types that can produce a canned example instance.
///
/// Examples feed API documentation and schema generation. They are never
/// used on a runtime request path.
pub trait Exemplifiable: Sized {
    /// Build the fixed example instance.
    fn create_example() -> Self;

    /// Render the example instance as JSON.
    fn example_json() -> serde_json::Result<Value>
    where
        Self: Serialize,
    {
        serde_json::to_value(Self::create_example())
    }
}

impl Exemplifiable for PrincipalUser {
    fn create_example() -> Self {
        Self {
            audit: AuditFields {
                id: Some(1),
                created_by_id: Some(1),
                modified_by_id: Some(1),
                ..AuditFields::default()
            },
            email: Some("admin@example.com".to_string()),
            privileged: true,
            ..Self::new("admin")
        }
    }
}
