//! Login command handler.

use bookdesk_core::ports::SessionStorePort;
use rustyline::DefaultEditor;

use crate::bootstrap::CliContext;
use crate::credentials;
use crate::error::CliError;

/// Execute the login command.
///
/// Prompts for any missing credentials, exchanges them for a JWT pair,
/// and persists the pair for later runs.
pub async fn execute(ctx: &CliContext, username: Option<String>) -> Result<(), CliError> {
    let mut editor = DefaultEditor::new()?;

    let username = match username {
        Some(username) => username,
        None => editor.readline("Username: ")?,
    };
    let username = username.trim().to_string();
    if username.is_empty() {
        return Err(CliError::Arguments("Username must not be empty".to_string()));
    }
    let password = editor.readline("Password: ")?;

    ctx.client
        .login(&username, password.trim())
        .await
        .map_err(|e| CliError::Auth(format!("Login failed: {e}")))?;

    if let Some(pair) = ctx.session.tokens() {
        credentials::save(&ctx.credentials_path, &pair)?;
    }

    let display_name = ctx
        .session
        .current_user()
        .map_or(username, |user| user.username);
    println!("Logged in as {display_name}.");
    Ok(())
}
