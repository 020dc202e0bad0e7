//! User command handler.

use std::io::Write;

use argus_core::PrincipalUser;
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::commands::UserArgs;
use crate::error::CliError;

/// Look up the selected user and write it to `out` as JSON.
pub async fn execute(
    ctx: &CliContext,
    args: &UserArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let reference = args.reference()?;
    debug!(%reference, "Fetching user");

    let user = ctx.users.get_user(&reference).await?;
    writeln!(out, "{}", render(&user)?)?;
    Ok(())
}

/// Pretty JSON form of a user, in the server's field naming.
pub fn render(user: &PrincipalUser) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(user)?)
}
