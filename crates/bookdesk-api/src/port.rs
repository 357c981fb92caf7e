//! Port trait implementation for `ApiClient`.
//!
//! This module implements the core-owned `RemoteGatewayPort` trait for
//! `ApiClient`, handling the conversion between wire types and core
//! domain types and the mapping from internal errors to gateway
//! errors.

use async_trait::async_trait;

use bookdesk_core::domain::{AssignmentRequest, Book, BookId, NewBook};
use bookdesk_core::ports::{
    AssignmentReceipt, BookPage, BookQuery, GatewayError, GatewayResult, RemoteGatewayPort,
};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::HttpBackend;
use crate::models::BookDto;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ApiError` to core `GatewayError`.
fn map_error(err: ApiError) -> GatewayError {
    match err {
        ApiError::RequestFailed {
            status,
            url,
            server_message,
        } => {
            if status == 401 || status == 403 {
                GatewayError::AuthRequired
            } else if status == 404 {
                match extract_book_id_from_url(&url) {
                    Some(book_id) => GatewayError::NotFound { book_id },
                    None => GatewayError::Network {
                        message: format!("API request failed with status 404: {url}"),
                    },
                }
            } else if let Some(message) = server_message {
                // The server understood and said no; surface its reason
                // verbatim.
                GatewayError::Rejected { message }
            } else {
                GatewayError::Network {
                    message: format!("API request failed with status {status}: {url}"),
                }
            }
        }
        ApiError::InvalidResponse { message } => GatewayError::InvalidResponse { message },
        ApiError::Network(e) => GatewayError::Network {
            message: e.to_string(),
        },
        ApiError::InvalidUrl(e) => GatewayError::InvalidResponse {
            message: e.to_string(),
        },
        ApiError::JsonParse(e) => GatewayError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

/// Extract a book id from an API URL.
///
/// URLs look like `http://host/api/books/7/assign/`.
fn extract_book_id_from_url(url: &str) -> Option<BookId> {
    let (_, rest) = url.split_once("/books/")?;
    rest.split('/').next()?.parse().ok()
}

// ============================================================================
// Type Conversions
// ============================================================================

/// Convert a wire `BookDto` to the domain `Book`.
fn to_book(dto: BookDto) -> Result<Book, ApiError> {
    let price = dto.price.value()?;
    Ok(Book {
        id: dto.id,
        title: dto.title,
        author: dto.author,
        isbn: dto.isbn,
        price,
        quantity: dto.quantity,
        about: dto.about,
    })
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> RemoteGatewayPort for ApiClient<B> {
    async fn list_books(&self, query: &BookQuery) -> GatewayResult<BookPage> {
        let (count, dtos) = self.fetch_page(query).await.map_err(map_error)?;
        let results = dtos
            .into_iter()
            .map(to_book)
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_error)?;
        Ok(BookPage { count, results })
    }

    async fn get_book(&self, book_id: BookId) -> GatewayResult<Book> {
        let dto = self.fetch_book(book_id).await.map_err(map_error)?;
        to_book(dto).map_err(map_error)
    }

    async fn create_book(&self, book: &NewBook) -> GatewayResult<Book> {
        let dto = self.submit_book(book).await.map_err(map_error)?;
        to_book(dto).map_err(map_error)
    }

    async fn assign_book(
        &self,
        book_id: BookId,
        request: &AssignmentRequest,
    ) -> GatewayResult<AssignmentReceipt> {
        let receipt = self
            .submit_assignment(book_id, request)
            .await
            .map_err(map_error)?;
        Ok(AssignmentReceipt {
            message: receipt.message,
            remaining_quantity: receipt.remaining_quantity,
        })
    }

    async fn chat(&self, book_id: BookId, message: &str) -> GatewayResult<String> {
        self.submit_chat(book_id, message).await.map_err(map_error)
    }

    async fn generate_summary(&self, title: &str, author: &str) -> GatewayResult<String> {
        self.submit_summary(title, author).await.map_err(map_error)
    }
}
