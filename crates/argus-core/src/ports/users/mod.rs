//! User lookup port definitions.
//!
//! This module defines the port trait and errors for user lookups against
//! the Argus service. The actual implementation lives in `argus-sdk`.

mod client;
mod error;

pub use client::UserClientPort;
pub use error::{UserPortError, UserPortResult};
