//! Subcommands of the `argus` tool.

use argus_core::UserRef;
use clap::{Args, Subcommand, ValueEnum};

use crate::error::CliError;

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up a user by id or username
    User(UserArgs),

    /// Print the example JSON document of a resource
    Example {
        /// Resource to print
        #[arg(value_enum)]
        kind: ExampleKind,
    },
}

/// Selector for the `user` command. Exactly one of the two is required.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct UserArgs {
    /// Numeric user id
    #[arg(long)]
    pub id: Option<u64>,

    /// Unique username
    #[arg(long)]
    pub username: Option<String>,
}

impl UserArgs {
    /// The user reference selected on the command line.
    pub fn reference(&self) -> Result<UserRef, CliError> {
        match (self.id, self.username.as_deref()) {
            (Some(id), None) => Ok(UserRef::Id(id)),
            (None, Some(username)) => Ok(UserRef::Username(username.to_string())),
            _ => Err(CliError::Arguments(
                "exactly one of --id or --username is required".to_string(),
            )),
        }
    }
}

/// Resources with an example document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExampleKind {
    Dashboard,
    User,
}
