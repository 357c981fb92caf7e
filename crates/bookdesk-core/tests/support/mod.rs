//! Shared test support: a scriptable fake gateway whose calls can be
//! gated on a watch channel, so tests can hold a request in flight and
//! release it at a chosen point.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::watch;

use bookdesk_core::domain::{AssignmentRequest, Book, BookId, NewBook};
use bookdesk_core::ports::{
    AssignmentReceipt, BookPage, BookQuery, GatewayError, GatewayResult, RemoteGatewayPort,
};

/// Opens a gate a fake-gateway call is blocked on.
pub struct ReleaseHandle(watch::Sender<bool>);

impl ReleaseHandle {
    pub fn release(&self) {
        let _ = self.0.send(true);
    }
}

fn new_gate() -> (ReleaseHandle, watch::Receiver<bool>) {
    let (tx, rx) = watch::channel(false);
    (ReleaseHandle(tx), rx)
}

async fn wait_for_gate(gate: Option<watch::Receiver<bool>>) {
    if let Some(mut rx) = gate {
        let _ = rx.wait_for(|released| *released).await;
    }
}

/// A fake gateway over an in-memory book list.
///
/// `list_books` answers with the count of all matches for the term and
/// the slice for the requested page, the way the real adapter
/// normalizes responses.
#[derive(Default)]
pub struct FakeGateway {
    books_by_term: Mutex<HashMap<String, Vec<Book>>>,
    list_gates: Mutex<HashMap<String, watch::Receiver<bool>>>,
    assign_gates: Mutex<HashMap<BookId, watch::Receiver<bool>>>,
    next_chat_gate: Mutex<Option<watch::Receiver<bool>>>,
    assign_results: Mutex<VecDeque<GatewayResult<AssignmentReceipt>>>,
    list_calls: Mutex<Vec<BookQuery>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the full match list for a search term (empty string for
    /// "all books").
    pub fn with_books(self, term: &str, books: Vec<Book>) -> Self {
        self.books_by_term
            .lock()
            .unwrap()
            .insert(term.to_string(), books);
        self
    }

    /// Block `list_books` calls for this term until released.
    pub fn gate_list(&self, term: &str) -> ReleaseHandle {
        let (handle, rx) = new_gate();
        self.list_gates.lock().unwrap().insert(term.to_string(), rx);
        handle
    }

    /// Block `assign_book` calls for this book until released.
    pub fn gate_assign(&self, book_id: BookId) -> ReleaseHandle {
        let (handle, rx) = new_gate();
        self.assign_gates.lock().unwrap().insert(book_id, rx);
        handle
    }

    /// Block the next `chat` call until released.
    pub fn gate_next_chat(&self) -> ReleaseHandle {
        let (handle, rx) = new_gate();
        *self.next_chat_gate.lock().unwrap() = Some(rx);
        handle
    }

    /// Script the result of the next `assign_book` call.
    pub fn push_assign_result(&self, result: GatewayResult<AssignmentReceipt>) {
        self.assign_results.lock().unwrap().push_back(result);
    }

    /// Queries `list_books` has seen, in order.
    pub fn list_calls(&self) -> Vec<BookQuery> {
        self.list_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteGatewayPort for FakeGateway {
    async fn list_books(&self, query: &BookQuery) -> GatewayResult<BookPage> {
        self.list_calls.lock().unwrap().push(query.clone());
        let term = query.term.clone().unwrap_or_default();

        let gate = self.list_gates.lock().unwrap().get(&term).cloned();
        wait_for_gate(gate).await;

        let all = self
            .books_by_term
            .lock()
            .unwrap()
            .get(&term)
            .cloned()
            .unwrap_or_default();
        let start = ((query.page - 1) * query.page_size) as usize;
        let end = (start + query.page_size as usize).min(all.len());
        let results = if start < all.len() {
            all[start..end].to_vec()
        } else {
            Vec::new()
        };
        Ok(BookPage {
            count: all.len() as u64,
            results,
        })
    }

    async fn get_book(&self, book_id: BookId) -> GatewayResult<Book> {
        let books = self.books_by_term.lock().unwrap();
        books
            .values()
            .flatten()
            .find(|b| b.id == book_id)
            .cloned()
            .ok_or(GatewayError::NotFound { book_id })
    }

    async fn create_book(&self, book: &NewBook) -> GatewayResult<Book> {
        Ok(Book {
            id: 1000,
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            price: book.price,
            quantity: book.quantity,
            about: book.about.clone(),
        })
    }

    async fn assign_book(
        &self,
        book_id: BookId,
        _request: &AssignmentRequest,
    ) -> GatewayResult<AssignmentReceipt> {
        let gate = self.assign_gates.lock().unwrap().get(&book_id).cloned();
        wait_for_gate(gate).await;

        self.assign_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(GatewayError::InvalidResponse {
                    message: "no scripted assignment result".to_string(),
                })
            })
    }

    async fn chat(&self, _book_id: BookId, message: &str) -> GatewayResult<String> {
        let gate = self.next_chat_gate.lock().unwrap().take();
        wait_for_gate(gate).await;
        Ok(format!("reply to: {message}"))
    }

    async fn generate_summary(&self, title: &str, author: &str) -> GatewayResult<String> {
        Ok(format!("{title} by {author}, in one paragraph."))
    }
}

/// A book with the given id, title, and stock.
pub fn book(id: BookId, title: &str, quantity: u32) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: "Unknown".to_string(),
        isbn: format!("978000000{id:04}"),
        price: 199.0,
        quantity,
        about: None,
    }
}
