//! Assignment transaction value objects.

use super::validation::ValidationError;

/// A single assignment submission: sell `quantity` copies of a book
/// to a named person at a given price.
///
/// Lives only for the duration of one submit. The one-click variant is
/// the same type with server defaults left in place (see
/// [`AssignmentRequest::one_copy`]), so there is exactly one
/// validation and submission path.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentRequest {
    /// Recipient; `None` lets the server record its default. When
    /// present it must be non-empty after trimming.
    pub person_name: Option<String>,
    /// Copies to assign. Must be positive.
    pub quantity: u32,
    /// Per-copy selling price; `None` lets the server choose. When
    /// present it must be non-negative.
    pub sell_price: Option<f64>,
}

impl AssignmentRequest {
    /// Build a form-based request with an explicit person and price.
    pub fn new(person_name: impl Into<String>, quantity: u32, sell_price: f64) -> Self {
        Self {
            person_name: Some(person_name.into().trim().to_string()),
            quantity,
            sell_price: Some(sell_price),
        }
    }

    /// The quick one-copy variant: quantity 1, person and price left
    /// to server defaults.
    #[must_use]
    pub const fn one_copy() -> Self {
        Self {
            person_name: None,
            quantity: 1,
            sell_price: None,
        }
    }

    /// Check the local preconditions. No network is involved; the
    /// stock check against the cached quantity happens in the
    /// controller, and the authoritative check on the server.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.person_name {
            if name.trim().is_empty() {
                return Err(ValidationError::EmptyPersonName);
            }
        }
        if self.quantity == 0 {
            return Err(ValidationError::InvalidQuantity);
        }
        if let Some(price) = self.sell_price {
            if !price.is_finite() || price < 0.0 {
                return Err(ValidationError::InvalidPrice);
            }
        }
        Ok(())
    }

    /// Derived total for display: quantity times selling price, when a
    /// price has been set.
    #[must_use]
    pub fn total_amount(&self) -> Option<f64> {
        self.sell_price.map(|price| price * f64::from(self.quantity))
    }
}
