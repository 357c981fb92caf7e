//! Logout command handler.

use crate::bootstrap::CliContext;
use crate::credentials;
use crate::error::CliError;

/// Execute the logout command: drop the in-memory tokens and the
/// persisted pair.
pub fn execute(ctx: &CliContext) -> Result<(), CliError> {
    ctx.client.logout();
    credentials::delete(&ctx.credentials_path)?;
    println!("Logged out.");
    Ok(())
}
