//! Command handlers.
//!
//! One module per subcommand. Handlers receive the composed
//! `CliContext` and delegate work to the core services; anything they
//! print is derived from what the services return.

pub mod add;
pub mod assign;
pub mod chat;
pub mod list;
pub mod login;
pub mod logout;
pub mod show;

use bookdesk_core::ports::SessionStorePort;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Reject commands that need a session before any network call.
///
/// The server would answer 401 anyway; checking locally gives a
/// friendlier message and skips the round trip.
pub fn require_login(ctx: &CliContext) -> Result<(), CliError> {
    if ctx.session.is_logged_in() {
        Ok(())
    } else {
        Err(CliError::Auth(
            "Not logged in. Run 'bookdesk login' first.".to_string(),
        ))
    }
}
