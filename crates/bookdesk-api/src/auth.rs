//! Token store and session queries.
//!
//! The store holds the JWT pair the token endpoint hands out. The HTTP
//! backend reads the access token from here to inject the bearer
//! header; nothing outside this crate ever sees the credentials. It is
//! an explicitly injected object, not ambient process state: whoever
//! composes the application decides which store a client uses.

use std::sync::RwLock;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use bookdesk_core::ports::{SessionStorePort, UserProfile};

/// An access/refresh token pair as issued by the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: Option<String>,
}

/// In-memory store for the current session's tokens.
///
/// Implements [`SessionStorePort`] so the core can gate commands on
/// login state without touching credentials.
#[derive(Debug, Default)]
pub struct TokenStore {
    tokens: RwLock<Option<TokenPair>>,
}

impl TokenStore {
    /// Create an empty (logged-out) store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a persisted token pair.
    #[must_use]
    pub fn with_tokens(pair: TokenPair) -> Self {
        Self {
            tokens: RwLock::new(Some(pair)),
        }
    }

    /// Replace the stored tokens.
    pub fn set(&self, pair: TokenPair) {
        *self.tokens.write().expect("token store lock poisoned") = Some(pair);
    }

    /// Drop the stored tokens (logout).
    pub fn clear(&self) {
        *self.tokens.write().expect("token store lock poisoned") = None;
    }

    /// The current access token, if logged in.
    pub fn access_token(&self) -> Option<String> {
        self.tokens
            .read()
            .expect("token store lock poisoned")
            .as_ref()
            .map(|pair| pair.access.clone())
    }

    /// Snapshot of the stored pair, for persistence between runs.
    pub fn tokens(&self) -> Option<TokenPair> {
        self.tokens
            .read()
            .expect("token store lock poisoned")
            .clone()
    }
}

impl SessionStorePort for TokenStore {
    fn is_logged_in(&self) -> bool {
        self.access_token().is_some()
    }

    fn current_user(&self) -> Option<UserProfile> {
        let token = self.access_token()?;
        let username = decode_username(&token)?;
        Some(UserProfile { username })
    }
}

/// Pull the `username` claim out of a JWT access token.
///
/// The payload is the middle dot-separated segment, base64url without
/// padding. No signature verification happens here - the server is the
/// authority; this is display-only.
fn decode_username(token: &str) -> Option<String> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims
        .get("username")
        .and_then(|v| v.as_str())
        .map(String::from)
}
