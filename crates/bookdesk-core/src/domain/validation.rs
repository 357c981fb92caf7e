//! Local precondition errors.
//!
//! These are resolved entirely client-side: when one is raised, no
//! gateway call has been made.

use thiserror::Error;

use super::book::BookId;

/// A local precondition failed before any network interaction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Person name was empty after trimming.
    #[error("Enter person name")]
    EmptyPersonName,

    /// Quantity was not a positive integer.
    #[error("Enter valid quantity")]
    InvalidQuantity,

    /// Price was negative or not a number.
    #[error("Enter valid price")]
    InvalidPrice,

    /// Requested more copies than the cached stock holds.
    #[error("Only {available} copies available, requested {requested}")]
    InsufficientStock { requested: u32, available: u32 },

    /// The cached stock is already exhausted.
    #[error("Book is out of stock")]
    OutOfStock,

    /// The book is not on the current page, so no cached copy exists.
    #[error("Book {book_id} is not in the current page")]
    UnknownBook { book_id: BookId },

    /// An assignment for this book is already in flight.
    #[error("An assignment for book {book_id} is already pending")]
    AssignmentPending { book_id: BookId },

    /// Page index must be 1-based.
    #[error("Page index must be at least 1")]
    InvalidPage,

    /// Page size must be positive.
    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    /// A required field was blank.
    #[error("{field} is required")]
    MissingField { field: &'static str },
}
