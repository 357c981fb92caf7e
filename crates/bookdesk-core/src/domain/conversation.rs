//! Conversation domain types.
//!
//! A conversation is a client-side transcript scoped to one book.
//! Turns alternate user/assistant by construction in the session
//! service; the server does not enforce ordering.

use serde::{Deserialize, Serialize};

use super::book::BookId;

/// The role of a turn's author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl TurnRole {
    /// Parse a role from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            "assistant" => Some(Self::Assistant),
            _ => None,
        }
    }

    /// Convert role to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for TurnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One message in a conversation transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

impl Turn {
    /// A user-authored turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
        }
    }

    /// An assistant-authored turn.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            text: text.into(),
        }
    }
}

/// A conversation about one book: the ordered transcript plus the
/// in-flight flag for the single outstanding completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(rename = "bookId")]
    pub book_id: BookId,
    pub turns: Vec<Turn>,
    pub sending: bool,
}

impl Conversation {
    /// A fresh, empty conversation for a book.
    #[must_use]
    pub const fn new(book_id: BookId) -> Self {
        Self {
            book_id,
            turns: Vec::new(),
            sending: false,
        }
    }
}
