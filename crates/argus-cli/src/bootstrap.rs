//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. The SDK client is built here and handed to
//! command handlers behind the core `UserClientPort` trait.

use std::sync::Arc;
use std::time::Duration;

use argus_core::UserClientPort;
use argus_sdk::{ArgusClientConfig, DefaultArgusClient};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Base URL of the Argus web services.
    pub base_url: String,
    /// Access token, if any.
    pub token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl CliConfig {
    /// Collect connection settings from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.timeout_secs == 0 {
            return Err(CliError::Config(
                "timeout must be at least one second".to_string(),
            ));
        }

        Ok(Self {
            base_url: cli.base_url.clone(),
            token: cli.token.clone().filter(|t| !t.trim().is_empty()),
            timeout: Duration::from_secs(cli.timeout_secs),
        })
    }

    /// SDK configuration for these settings.
    pub fn client_config(&self) -> ArgusClientConfig {
        ArgusClientConfig::new()
            .with_base_url(self.base_url.as_str())
            .with_timeout(self.timeout)
            .with_optional_token(self.token.clone())
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// User lookups.
    pub users: Arc<dyn UserClientPort>,
}

impl CliContext {
    /// Build a context around an existing port, e.g. a test double.
    pub fn new(users: Arc<dyn UserClientPort>) -> Self {
        Self { users }
    }
}

/// Wire up the CLI context.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    debug!(base_url = %config.base_url, "Bootstrapping Argus client");
    let client = DefaultArgusClient::new(&config.client_config())?;
    Ok(CliContext::new(Arc::new(client)))
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
/// `RUST_LOG` is honoured unless `--verbose` asks for debug output.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
