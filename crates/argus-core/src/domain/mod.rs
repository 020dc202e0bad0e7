//! Core domain types.
//!
//! These types represent the Argus entities as the service persists them,
//! independent of any transport concerns.
//!
//! # Structure
//!
//! - `audit` - Identity/audit fields shared by all entities
//! - `user` - Principal user types
//! - `dashboard` - Dashboard entity, layout and template variables

mod audit;
mod dashboard;
mod user;

pub use audit::{AuditFields, HasAuditFields};
pub use dashboard::{Dashboard, LayoutType, TemplateVar};
pub use user::{PrincipalUser, UserRef};
