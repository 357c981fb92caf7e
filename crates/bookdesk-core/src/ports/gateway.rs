//! Remote data gateway port.
//!
//! This port defines the interface the core uses to talk to the
//! book-management API. The implementation lives in `bookdesk-api`.
//!
//! # Design
//!
//! - Uses core-owned DTOs, not wire types
//! - Returns `GatewayError` for all failures
//! - Bearer-token injection happens inside the implementation; the
//!   core never touches credentials

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{AssignmentRequest, Book, BookId, NewBook};

/// Search and pagination parameters for a catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookQuery {
    /// Case-insensitive match against title, author, and ISBN.
    /// `None` lists everything.
    pub term: Option<String>,
    /// 1-based page index.
    pub page: u32,
    pub page_size: u32,
}

/// One normalized page of results from the gateway.
///
/// Whatever shape the server answered with (paginated envelope or bare
/// list), the gateway delivers the total match count and the slice for
/// the requested page.
#[derive(Debug, Clone, PartialEq)]
pub struct BookPage {
    pub count: u64,
    pub results: Vec<Book>,
}

/// Server confirmation of a completed assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentReceipt {
    /// Human-readable confirmation from the server.
    pub message: String,
    /// Authoritative stock after the assignment; overwrites any local
    /// guess.
    pub remaining_quantity: u32,
}

/// Errors from gateway operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The server understood the request and said no (e.g. the last
    /// copy was assigned concurrently). The message is user-visible.
    #[error("{message}")]
    Rejected {
        /// Server-provided reason, surfaced verbatim.
        message: String,
    },

    /// Authentication required or failed.
    #[error("Authentication required")]
    AuthRequired,

    /// The requested book does not exist.
    #[error("Book {book_id} not found")]
    NotFound {
        /// The id that was not found.
        book_id: BookId,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error.
        message: String,
    },

    /// The server answered with something unparseable.
    #[error("Invalid response from server: {message}")]
    InvalidResponse {
        /// What was invalid.
        message: String,
    },
}

/// Result type alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Port trait for the remote book-management API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteGatewayPort: Send + Sync {
    /// Fetch one page of books matching the query, normalized.
    async fn list_books(&self, query: &BookQuery) -> GatewayResult<BookPage>;

    /// Fetch a single book by id.
    async fn get_book(&self, book_id: BookId) -> GatewayResult<Book>;

    /// Create a new book. Server-side validation (ISBN format and
    /// uniqueness) may still reject it.
    async fn create_book(&self, book: &NewBook) -> GatewayResult<Book>;

    /// Assign copies of a book. Fields left as `None` in the request
    /// are omitted from the wire body so the server applies defaults.
    async fn assign_book(
        &self,
        book_id: BookId,
        request: &AssignmentRequest,
    ) -> GatewayResult<AssignmentReceipt>;

    /// Send one conversation message about a book and return the
    /// assistant's reply.
    async fn chat(&self, book_id: BookId, message: &str) -> GatewayResult<String>;

    /// Ask the AI service for a short synopsis of a title.
    async fn generate_summary(&self, title: &str, author: &str) -> GatewayResult<String>;
}
