//! Canonical event union for all presentation adapters.
//!
//! This module is the single source of truth for the notifications a
//! rendering layer can bind to. Catalog and conversation services emit
//! these through the [`crate::ports::AppEventEmitter`] port.
//!
//! # Wire Format
//!
//! Events serialize with a `type` tag so a JS-side listener can
//! discriminate them:
//!
//! ```json
//! { "type": "quantity_changed", "bookId": 7, "remaining": 2 }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{BookId, TurnRole};

/// Canonical event types for all adapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    // ========== Catalog Events ==========
    /// A catalog page was fetched and applied to state.
    CatalogLoaded {
        /// Search term the page belongs to (empty for "all books").
        term: String,
        /// 1-based page index.
        page: u32,
        /// Total matching records.
        count: u64,
    },

    /// A catalog load failed; state now holds an empty page. Distinct
    /// from a load that legitimately matched nothing.
    CatalogLoadFailed {
        term: String,
        /// Description of the failure.
        message: String,
    },

    /// A new title was created on the server.
    BookAdded {
        #[serde(rename = "bookId")]
        book_id: BookId,
        title: String,
    },

    // ========== Assignment Events ==========
    /// An assignment went in flight; the control for this book should
    /// disable.
    AssignmentStarted {
        #[serde(rename = "bookId")]
        book_id: BookId,
    },

    /// The in-flight assignment resolved (either way); the control
    /// re-enables.
    AssignmentSettled {
        #[serde(rename = "bookId")]
        book_id: BookId,
    },

    /// The server confirmed a new remaining quantity for one book.
    QuantityChanged {
        #[serde(rename = "bookId")]
        book_id: BookId,
        remaining: u32,
    },

    // ========== Conversation Events ==========
    /// A turn was appended to the transcript.
    TurnAppended {
        #[serde(rename = "bookId")]
        book_id: BookId,
        role: TurnRole,
    },

    /// The conversation's sending flag flipped.
    SendingChanged {
        #[serde(rename = "bookId")]
        book_id: BookId,
        sending: bool,
    },
}

impl AppEvent {
    /// Create a catalog-loaded event.
    pub fn catalog_loaded(term: impl Into<String>, page: u32, count: u64) -> Self {
        Self::CatalogLoaded {
            term: term.into(),
            page,
            count,
        }
    }

    /// Create a catalog-load-failed event.
    pub fn catalog_load_failed(term: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CatalogLoadFailed {
            term: term.into(),
            message: message.into(),
        }
    }

    /// Create a book-added event.
    pub fn book_added(book_id: BookId, title: impl Into<String>) -> Self {
        Self::BookAdded {
            book_id,
            title: title.into(),
        }
    }

    /// Create an assignment-started event.
    pub const fn assignment_started(book_id: BookId) -> Self {
        Self::AssignmentStarted { book_id }
    }

    /// Create an assignment-settled event.
    pub const fn assignment_settled(book_id: BookId) -> Self {
        Self::AssignmentSettled { book_id }
    }

    /// Create a quantity-changed event.
    pub const fn quantity_changed(book_id: BookId, remaining: u32) -> Self {
        Self::QuantityChanged { book_id, remaining }
    }

    /// Create a turn-appended event.
    pub const fn turn_appended(book_id: BookId, role: TurnRole) -> Self {
        Self::TurnAppended { book_id, role }
    }

    /// Create a sending-changed event.
    pub const fn sending_changed(book_id: BookId, sending: bool) -> Self {
        Self::SendingChanged { book_id, sending }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_tag_with_type() {
        let json = serde_json::to_value(AppEvent::quantity_changed(7, 2)).unwrap();
        assert_eq!(json["type"], "quantity_changed");
        assert_eq!(json["bookId"], 7);
        assert_eq!(json["remaining"], 2);
    }

    #[test]
    fn test_turn_role_serializes_lowercase() {
        let json = serde_json::to_value(AppEvent::turn_appended(1, TurnRole::Assistant)).unwrap();
        assert_eq!(json["role"], "assistant");
    }
}
