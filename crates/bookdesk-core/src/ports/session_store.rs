//! Session store port.
//!
//! Read-only view of the authenticated session, consumed to gate
//! commands that require a login. Token handling itself lives in the
//! gateway adapter; the core never reads credentials.

/// The logged-in user, as far as the core cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
}

/// Port for querying the current session.
pub trait SessionStorePort: Send + Sync {
    /// Whether a usable access token is present.
    fn is_logged_in(&self) -> bool;

    /// The current user, if logged in and the token is readable.
    fn current_user(&self) -> Option<UserProfile>;
}
