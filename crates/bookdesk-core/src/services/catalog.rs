//! Catalog controller - owns the current page of books and drives
//! assignment transactions.
//!
//! The controller holds the only mutable catalog state: the current
//! page is replaced wholesale by `load_page` and patched in place (one
//! book's quantity) by a successful assignment. No other path writes
//! it.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

use crate::domain::catalog::page_window;
use crate::domain::{AssignmentRequest, Book, BookId, CatalogPage, NewBook, ValidationError};
use crate::events::AppEvent;
use crate::ports::{
    AppEventEmitter, AssignmentReceipt, BookQuery, GatewayError, RemoteGatewayPort,
};

/// Page size used when the caller does not pass one explicitly.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Errors from catalog controller operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A local precondition failed; no gateway call was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The gateway call failed or was rejected by the server.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Outcome of a page load that did not fail outright.
///
/// A load issued before a newer one resolves is dropped rather than
/// applied, so callers can tell a discarded stale result from state
/// they should render.
#[derive(Debug, Clone, PartialEq)]
pub enum PageLoad {
    /// The result was the latest request and is now the current page.
    Applied(CatalogPage),
    /// A newer request was issued while this one was in flight; its
    /// result was discarded and state is untouched.
    Superseded,
}

struct CatalogState {
    page: CatalogPage,
    term: String,
    page_size: u32,
}

/// Maintains the current catalog page for a search term and drives the
/// assignment transaction for one book at a time.
///
/// Assignment is serialized per book, not globally: while book X has an
/// assignment in flight, further attempts for X are rejected and other
/// books are unaffected.
pub struct CatalogController {
    gateway: Arc<dyn RemoteGatewayPort>,
    emitter: Arc<dyn AppEventEmitter>,
    state: Mutex<CatalogState>,
    /// Ticket counter for the stale-response guard. A response is
    /// applied only if its ticket is still the newest issued.
    load_seq: AtomicU64,
    /// Books with an assignment currently in flight.
    assigning: Mutex<HashSet<BookId>>,
}

impl CatalogController {
    /// Create a controller with the given gateway and event emitter.
    pub fn new(gateway: Arc<dyn RemoteGatewayPort>, emitter: Arc<dyn AppEventEmitter>) -> Self {
        Self {
            gateway,
            emitter,
            state: Mutex::new(CatalogState {
                page: CatalogPage::empty(1, DEFAULT_PAGE_SIZE),
                term: String::new(),
                page_size: DEFAULT_PAGE_SIZE,
            }),
            load_seq: AtomicU64::new(0),
            assigning: Mutex::new(HashSet::new()),
        }
    }

    fn state(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().expect("catalog state lock poisoned")
    }

    fn assigning(&self) -> MutexGuard<'_, HashSet<BookId>> {
        self.assigning.lock().expect("assignment set lock poisoned")
    }

    /// Fetch one page of books for `term` and make it the current page.
    ///
    /// If a newer load is issued while this one is in flight, the late
    /// result is dropped and `Ok(PageLoad::Superseded)` is returned.
    /// A transport failure leaves an empty page in state and surfaces
    /// the error, so the caller can tell "load failed" apart from
    /// "zero matches".
    pub async fn load_page(
        &self,
        term: &str,
        page: u32,
        page_size: u32,
    ) -> Result<PageLoad, CatalogError> {
        if page < 1 {
            return Err(ValidationError::InvalidPage.into());
        }
        if page_size < 1 {
            return Err(ValidationError::InvalidPageSize.into());
        }

        let term = term.trim().to_string();
        let seq = self.load_seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state();
            state.term.clone_from(&term);
            state.page_size = page_size;
        }

        let query = BookQuery {
            term: (!term.is_empty()).then(|| term.clone()),
            page,
            page_size,
        };
        tracing::debug!(%term, page, page_size, "loading catalog page");
        let result = self.gateway.list_books(&query).await;

        if self.load_seq.load(Ordering::SeqCst) != seq {
            tracing::debug!(%term, page, "discarding stale catalog response");
            return Ok(PageLoad::Superseded);
        }

        match result {
            Ok(book_page) => {
                let view = CatalogPage {
                    books: book_page.results,
                    count: book_page.count,
                    page,
                    page_size,
                };
                self.state().page = view.clone();
                self.emitter
                    .emit(AppEvent::catalog_loaded(&term, page, view.count));
                Ok(PageLoad::Applied(view))
            }
            Err(err) => {
                self.state().page = CatalogPage::empty(page, page_size);
                self.emitter
                    .emit(AppEvent::catalog_load_failed(&term, err.to_string()));
                Err(err.into())
            }
        }
    }

    /// Switch to a new search term, resetting to page 1.
    ///
    /// Any in-flight load for the old term is superseded.
    pub async fn change_search_term(&self, term: &str) -> Result<PageLoad, CatalogError> {
        let page_size = self.state().page_size;
        self.load_page(term, 1, page_size).await
    }

    /// Move to another page of the current search term.
    pub async fn change_page(&self, page: u32) -> Result<PageLoad, CatalogError> {
        let (term, page_size) = {
            let state = self.state();
            (state.term.clone(), state.page_size)
        };
        self.load_page(&term, page, page_size).await
    }

    /// Assign copies of a book to a person.
    ///
    /// Local preconditions run first and reject without any network
    /// call: the request must validate, no assignment for this book may
    /// be pending, and when the book is cached in the current page the
    /// requested quantity must not exceed the cached stock. The cached
    /// check is optimistic only - the server may still reject under
    /// concurrent assignment, and its answer wins.
    ///
    /// On success the server's remaining quantity overwrites that one
    /// book's cached quantity in place; on failure nothing is touched.
    pub async fn assign(
        &self,
        book_id: BookId,
        request: &AssignmentRequest,
    ) -> Result<AssignmentReceipt, CatalogError> {
        request.validate()?;

        if let Some(available) = self.cached_quantity(book_id) {
            if request.quantity > available {
                return Err(ValidationError::InsufficientStock {
                    requested: request.quantity,
                    available,
                }
                .into());
            }
        }

        if !self.assigning().insert(book_id) {
            return Err(ValidationError::AssignmentPending { book_id }.into());
        }
        self.emitter.emit(AppEvent::assignment_started(book_id));
        tracing::debug!(book_id, quantity = request.quantity, "submitting assignment");

        let result = self.gateway.assign_book(book_id, request).await;

        if let Ok(receipt) = &result {
            if let Some(book) = self.state().page.book_mut(book_id) {
                book.quantity = receipt.remaining_quantity;
            }
            self.emitter
                .emit(AppEvent::quantity_changed(book_id, receipt.remaining_quantity));
        }

        self.assigning().remove(&book_id);
        self.emitter.emit(AppEvent::assignment_settled(book_id));
        result.map_err(CatalogError::from)
    }

    /// Assign a single copy with server-chosen person and price.
    ///
    /// This is the one-click variant of [`CatalogController::assign`]:
    /// the same request type with defaults filled in. It requires the
    /// book to be cached in the current page and is rejected outright
    /// when the cached stock is exhausted.
    pub async fn assign_quickly(&self, book_id: BookId) -> Result<AssignmentReceipt, CatalogError> {
        match self.cached_quantity(book_id) {
            None => Err(ValidationError::UnknownBook { book_id }.into()),
            Some(0) => Err(ValidationError::OutOfStock.into()),
            Some(_) => self.assign(book_id, &AssignmentRequest::one_copy()).await,
        }
    }

    /// Create a new title on the server.
    ///
    /// The current page is not patched; a reload picks the new book up.
    pub async fn add_book(&self, book: &NewBook) -> Result<Book, CatalogError> {
        book.validate()?;
        let created = self.gateway.create_book(book).await?;
        tracing::info!(book_id = created.id, title = %created.title, "book created");
        self.emitter
            .emit(AppEvent::book_added(created.id, created.title.clone()));
        Ok(created)
    }

    /// Ask the AI service for a synopsis draft to prefill the add form.
    pub async fn suggest_about(&self, title: &str, author: &str) -> Result<String, CatalogError> {
        if title.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "title" }.into());
        }
        if author.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "author" }.into());
        }
        Ok(self.gateway.generate_summary(title, author).await?)
    }

    /// Snapshot of the current page.
    pub fn current_page(&self) -> CatalogPage {
        self.state().page.clone()
    }

    /// The most recently requested search term.
    pub fn search_term(&self) -> String {
        self.state().term.clone()
    }

    /// Look up a book in the current page.
    pub fn book(&self, book_id: BookId) -> Option<Book> {
        self.state().page.book(book_id).cloned()
    }

    /// Whether an assignment for this book is in flight (its control
    /// should be disabled).
    pub fn is_assigning(&self, book_id: BookId) -> bool {
        self.assigning().contains(&book_id)
    }

    /// The run of page buttons to render for the current state.
    pub fn page_window(&self, max_buttons: u32) -> Vec<u32> {
        let state = self.state();
        page_window(state.page.page, state.page.total_pages(), max_buttons)
    }

    fn cached_quantity(&self, book_id: BookId) -> Option<u32> {
        self.state().page.book(book_id).map(|b| b.quantity)
    }
}
