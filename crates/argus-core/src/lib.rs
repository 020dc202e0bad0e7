#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    AuditFields, Dashboard, HasAuditFields, LayoutType, PrincipalUser, TemplateVar, UserRef,
};
pub use dto::{DashboardDto, Exemplifiable};
pub use error::{CoreError, CoreResult, NULL_ENTITY_MESSAGE};
pub use ports::{UserClientPort, UserPortError, UserPortResult};
