#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod port;
mod url;
mod validation;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{ArgusClient, DefaultArgusClient, UserService};

// Configuration
pub use config::{ArgusClientConfig, DEFAULT_BASE_URL};

// Errors
pub use error::{SdkError, SdkResult};
pub use port::map_error;

// HTTP collaborator
pub use http::{ArgusResponse, HttpBackend, RequestType, ReqwestBackend};

// Path builders
pub use self::url::{build_user_by_id_path, build_user_by_username_path};

// Silence unused dev-dependency warnings
#[cfg(test)]
use httpmock as _;
