//! Example command handler.

use std::io::Write;

use argus_core::{DashboardDto, Exemplifiable, PrincipalUser};

use crate::commands::ExampleKind;
use crate::error::CliError;

/// Write the example document for `kind` to `out`.
pub fn execute(kind: ExampleKind, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "{}", render(kind)?)?;
    Ok(())
}

/// Pretty JSON of the example instance for `kind`.
pub fn render(kind: ExampleKind) -> Result<String, CliError> {
    let value = match kind {
        ExampleKind::Dashboard => DashboardDto::example_json()?,
        ExampleKind::User => PrincipalUser::example_json()?,
    };
    Ok(serde_json::to_string_pretty(&value)?)
}
