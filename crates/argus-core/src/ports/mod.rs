//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or `url` types in any signature
//! - Errors are core-owned enums; adapters map their own errors into them

pub mod users;

pub use users::{UserClientPort, UserPortError, UserPortResult};
