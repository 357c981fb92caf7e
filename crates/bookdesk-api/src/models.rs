//! Internal wire types for the book-management API.
//!
//! These types are internal to `bookdesk-api` and are not exposed to
//! consumers. External consumers should use the port DTOs defined in
//! `bookdesk-core`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ApiError, ApiResult};

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the API (default: `http://127.0.0.1:8000/api/`)
    pub base_url: Url,
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum number of retry attempts for transient GET errors
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff
    pub retry_base_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("http://127.0.0.1:8000/api/").expect("default API URL is valid"),
            user_agent: concat!("bookdesk/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
            max_retries: 3,
            retry_base_delay_ms: 500,
        }
    }
}

// ============================================================================
// Response Bodies
// ============================================================================

/// A book as the server serializes it.
///
/// Older deployments call the synopsis field `summary`; newer ones call
/// it `about`. Both are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: PriceDto,
    pub quantity: u32,
    #[serde(default, alias = "summary")]
    pub about: Option<String>,
}

/// Price field tolerance: DRF serializes decimals as strings, plain
/// JSON numbers also appear.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PriceDto {
    Number(f64),
    Text(String),
}

impl PriceDto {
    /// Parse the price into a float, whatever shape it arrived in.
    pub fn value(&self) -> ApiResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s.trim().parse().map_err(|_| ApiError::InvalidResponse {
                message: format!("price was neither a number nor a decimal string: {s:?}"),
            }),
        }
    }
}

/// The two shapes the list endpoint answers with: a paginated envelope
/// or a bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BookListBody {
    Paginated { count: u64, results: Vec<BookDto> },
    Bare(Vec<BookDto>),
}

/// Assignment confirmation body.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignReceiptDto {
    pub message: String,
    pub remaining_quantity: u32,
}

/// Chat completion body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReplyDto {
    pub reply: String,
}

/// AI summary body.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryDto {
    pub summary: String,
}

/// Token endpoint body (JWT pair).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPairDto {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

// ============================================================================
// Request Bodies
// ============================================================================

/// Body for `POST books/{id}/assign/`.
///
/// Optional fields are omitted from the wire entirely so the server
/// applies its defaults (the one-click flow).
#[derive(Debug, Clone, Serialize)]
pub struct AssignBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_name: Option<&'a str>,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_price: Option<f64>,
}

/// Body for `POST books/`.
#[derive(Debug, Clone, Serialize)]
pub struct NewBookBody<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub isbn: &'a str,
    pub price: f64,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<&'a str>,
}

/// Body for `POST books/{id}/chat/`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatBody<'a> {
    pub message: &'a str,
}

/// Body for `POST books/generate_summary/`.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryBody<'a> {
    pub title: &'a str,
    pub author: &'a str,
}

/// Body for `POST token/`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginBody<'a> {
    pub username: &'a str,
    pub password: &'a str,
}
