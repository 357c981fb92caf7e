//! Book domain types.

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Server-assigned book identifier. Opaque and immutable.
pub type BookId = i64;

/// A book in the catalog.
///
/// `quantity` is the authoritative remaining stock; it is the only
/// field that changes after creation, and only through a successful
/// assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Fixed-length numeric string; uniqueness is enforced server-side.
    pub isbn: String,
    pub price: f64,
    pub quantity: u32,
    /// Free-text synopsis, if one has been written or generated.
    pub about: Option<String>,
}

/// Data for creating a new book.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: f64,
    pub quantity: u32,
    pub about: Option<String>,
}

impl NewBook {
    /// Check the add-form preconditions.
    ///
    /// All fields except `about` are required; the price must be
    /// non-negative. ISBN format and uniqueness are the server's call.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("title", &self.title),
            ("author", &self.author),
            ("isbn", &self.isbn),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField { field });
            }
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(())
    }
}
