//! API client for the book-management REST service.
//!
//! The client is generic over an HTTP backend, allowing for easy
//! testing. Use `DefaultApiClient` for production code. Methods here
//! speak wire types; the port implementation in `port.rs` converts to
//! domain types.

use std::sync::Arc;

use bookdesk_core::domain::{AssignmentRequest, BookId, NewBook};
use bookdesk_core::ports::BookQuery;

use crate::auth::{TokenPair, TokenStore};
use crate::config::ApiClientConfig;
use crate::error::ApiResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{
    ApiConfig, AssignBody, AssignReceiptDto, BookDto, BookListBody, ChatBody, ChatReplyDto,
    LoginBody, NewBookBody, SummaryBody, SummaryDto, TokenPairDto,
};
use crate::url::{
    build_assign_url, build_book_url, build_books_url, build_chat_url, build_list_url,
    build_summary_url, build_token_url,
};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default API client using the reqwest HTTP backend.
pub type DefaultApiClient = ApiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the book-management REST API.
///
/// Holds the token store it shares with its backend so `login` and
/// `logout` take effect on subsequent requests immediately.
pub struct ApiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ApiConfig,
    tokens: Arc<TokenStore>,
}

impl DefaultApiClient {
    /// Create a new client with the given configuration and token
    /// store.
    pub fn new(config: &ApiClientConfig, tokens: Arc<TokenStore>) -> Self {
        let internal_config = to_internal_config(config);
        let backend = ReqwestBackend::new(&internal_config, tokens.clone());
        Self {
            backend,
            config: internal_config,
            tokens,
        }
    }
}

fn to_internal_config(config: &ApiClientConfig) -> ApiConfig {
    ApiConfig {
        base_url: url::Url::parse(&config.base_url).unwrap_or_else(|_| {
            url::Url::parse("http://127.0.0.1:8000/api/").expect("default URL is valid")
        }),
        user_agent: config.user_agent.clone(),
        timeout_secs: config.timeout.as_secs(),
        max_retries: config.max_retries,
        #[allow(clippy::cast_possible_truncation)] // backoff delays stay far below u64 millis
        retry_base_delay_ms: config.retry_base_delay.as_millis() as u64,
    }
}

impl<B: HttpBackend> ApiClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) fn with_backend(config: ApiConfig, backend: B, tokens: Arc<TokenStore>) -> Self {
        Self {
            backend,
            config,
            tokens,
        }
    }

    /// Exchange credentials for a JWT pair and store it.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<()> {
        let url = build_token_url(&self.config);
        let body = serde_json::to_value(LoginBody { username, password })?;
        let pair: TokenPairDto = self.backend.post_json(&url, &body).await?;
        self.tokens.set(TokenPair {
            access: pair.access,
            refresh: pair.refresh,
        });
        tracing::debug!(username, "login succeeded");
        Ok(())
    }

    /// Drop the stored session tokens.
    pub fn logout(&self) {
        self.tokens.clear();
    }

    /// Fetch one page of books, normalized to (total count, page
    /// slice) whichever shape the server answered with.
    pub(crate) async fn fetch_page(&self, query: &BookQuery) -> ApiResult<(u64, Vec<BookDto>)> {
        let url = build_list_url(&self.config, query);
        let body: BookListBody = self.backend.get_json(&url).await?;
        Ok(normalize_page(body, query))
    }

    pub(crate) async fn fetch_book(&self, book_id: BookId) -> ApiResult<BookDto> {
        let url = build_book_url(&self.config, book_id);
        self.backend.get_json(&url).await
    }

    pub(crate) async fn submit_book(&self, book: &NewBook) -> ApiResult<BookDto> {
        let url = build_books_url(&self.config);
        let body = serde_json::to_value(NewBookBody {
            title: &book.title,
            author: &book.author,
            isbn: &book.isbn,
            price: book.price,
            quantity: book.quantity,
            about: book.about.as_deref(),
        })?;
        self.backend.post_json(&url, &body).await
    }

    pub(crate) async fn submit_assignment(
        &self,
        book_id: BookId,
        request: &AssignmentRequest,
    ) -> ApiResult<AssignReceiptDto> {
        let url = build_assign_url(&self.config, book_id);
        let body = serde_json::to_value(AssignBody {
            person_name: request.person_name.as_deref(),
            quantity: request.quantity,
            sell_price: request.sell_price,
        })?;
        self.backend.post_json(&url, &body).await
    }

    pub(crate) async fn submit_chat(&self, book_id: BookId, message: &str) -> ApiResult<String> {
        let url = build_chat_url(&self.config, book_id);
        let body = serde_json::to_value(ChatBody { message })?;
        let reply: ChatReplyDto = self.backend.post_json(&url, &body).await?;
        Ok(reply.reply)
    }

    pub(crate) async fn submit_summary(&self, title: &str, author: &str) -> ApiResult<String> {
        let url = build_summary_url(&self.config);
        let body = serde_json::to_value(SummaryBody { title, author })?;
        let summary: SummaryDto = self.backend.post_json(&url, &body).await?;
        Ok(summary.summary)
    }
}

/// Normalize the two list shapes into (total count, page slice).
///
/// A paginated envelope already carries both. A bare list is the whole
/// match set: count is its length and the slice for the requested page
/// is cut client-side.
fn normalize_page(body: BookListBody, query: &BookQuery) -> (u64, Vec<BookDto>) {
    match body {
        BookListBody::Paginated { count, results } => (count, results),
        BookListBody::Bare(all) => {
            let count = all.len() as u64;
            let start = ((query.page - 1) * query.page_size) as usize;
            let end = (start + query.page_size as usize).min(all.len());
            let slice = if start < all.len() {
                all[start..end].to_vec()
            } else {
                Vec::new()
            };
            (count, slice)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    pub(crate) fn book_json(id: i64, title: &str) -> serde_json::Value {
        json!({
            "id": id, "title": title, "author": "Unknown",
            "isbn": format!("978000000{id:04}"), "price": "199.00", "quantity": 2
        })
    }

    pub(crate) fn client_with(backend: FakeBackend) -> ApiClient<FakeBackend> {
        ApiClient::with_backend(ApiConfig::default(), backend, Arc::new(TokenStore::new()))
    }

    fn query(page: u32) -> BookQuery {
        BookQuery {
            term: None,
            page,
            page_size: 10,
        }
    }

    #[tokio::test]
    async fn test_fetch_page_paginated_passthrough() {
        let backend = FakeBackend::new().with_response(
            "books/?",
            CannedResponse::ok(json!({
                "count": 23,
                "results": [book_json(1, "Dune")]
            })),
        );
        let client = client_with(backend);

        let (count, books) = client.fetch_page(&query(1)).await.unwrap();
        assert_eq!(count, 23);
        assert_eq!(books.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_page_bare_list_is_sliced_client_side() {
        let all: Vec<_> = (1..=23).map(|i| book_json(i, "Book")).collect();
        let backend =
            FakeBackend::new().with_response("books/?", CannedResponse::ok(json!(all)));
        let client = client_with(backend);

        let (count, books) = client.fetch_page(&query(2)).await.unwrap();
        assert_eq!(count, 23);
        // Second slice of ten: ids 11..=20.
        assert_eq!(books.len(), 10);
        assert_eq!(books[0].id, 11);
        assert_eq!(books[9].id, 20);

        let (count, books) = client.fetch_page(&query(3)).await.unwrap();
        assert_eq!(count, 23);
        assert_eq!(books.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_page_bare_list_past_the_end() {
        let backend = FakeBackend::new()
            .with_response("books/?", CannedResponse::ok(json!([book_json(1, "Dune")])));
        let client = client_with(backend);

        let (count, books) = client.fetch_page(&query(4)).await.unwrap();
        assert_eq!(count, 1);
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_login_stores_token_pair() {
        let backend = FakeBackend::new().with_response(
            "token/",
            CannedResponse::ok(json!({"access": "acc.ess.token", "refresh": "refresh-token"})),
        );
        let tokens = Arc::new(TokenStore::new());
        let client =
            ApiClient::with_backend(ApiConfig::default(), backend, tokens.clone());

        client.login("asha", "hunter2").await.unwrap();

        let pair = tokens.tokens().unwrap();
        assert_eq!(pair.access, "acc.ess.token");
        assert_eq!(pair.refresh.as_deref(), Some("refresh-token"));

        let (url, body) = client.backend.posted().into_iter().next().unwrap();
        assert!(url.ends_with("/api/token/"));
        assert_eq!(body, json!({"username": "asha", "password": "hunter2"}));

        client.logout();
        assert!(tokens.tokens().is_none());
    }
}
