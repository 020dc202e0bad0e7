//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use argus_sdk::DEFAULT_BASE_URL;

use crate::commands::Commands;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Command-line interface for the Argus web services.
///
/// Connection settings are global so they can be given before or after the
/// subcommand.
#[derive(Debug, Parser)]
#[command(name = "argus")]
#[command(about = "Query the Argus monitoring service")]
#[command(version)]
pub struct Cli {
    /// Base URL of the Argus web services
    #[arg(long, env = "ARGUS_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Access token sent as a Bearer credential
    #[arg(long, env = "ARGUS_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "ARGUS_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
