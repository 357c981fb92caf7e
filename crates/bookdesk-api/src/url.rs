//! URL construction helpers for the book-management API.
//!
//! This module provides pure functions for building endpoint URLs,
//! ensuring consistent construction across all API calls. The server
//! routes with trailing slashes; every builder keeps them.

use bookdesk_core::domain::BookId;
use bookdesk_core::ports::BookQuery;
use url::Url;

use crate::models::ApiConfig;

fn with_path(config: &ApiConfig, suffix: &str) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/{suffix}"));
    url
}

/// Build the list URL with search and pagination parameters.
pub fn build_list_url(config: &ApiConfig, query: &BookQuery) -> Url {
    let mut url = with_path(config, "books/");
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(ref term) = query.term {
            pairs.append_pair("q", term);
        }
        pairs.append_pair("page", &query.page.to_string());
        pairs.append_pair("page_size", &query.page_size.to_string());
    }
    url
}

/// Build the URL for a single book.
pub fn build_book_url(config: &ApiConfig, book_id: BookId) -> Url {
    with_path(config, &format!("books/{book_id}/"))
}

/// Build the book-collection URL (create).
pub fn build_books_url(config: &ApiConfig) -> Url {
    with_path(config, "books/")
}

/// Build the assignment URL for a book.
pub fn build_assign_url(config: &ApiConfig, book_id: BookId) -> Url {
    with_path(config, &format!("books/{book_id}/assign/"))
}

/// Build the chat URL for a book.
pub fn build_chat_url(config: &ApiConfig, book_id: BookId) -> Url {
    with_path(config, &format!("books/{book_id}/chat/"))
}

/// Build the AI-summary URL.
pub fn build_summary_url(config: &ApiConfig) -> Url {
    with_path(config, "books/generate_summary/")
}

/// Build the token (login) URL.
pub fn build_token_url(config: &ApiConfig) -> Url {
    with_path(config, "token/")
}
