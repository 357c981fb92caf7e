//! Core domain types, port definitions, and state-holder services for
//! bookdesk.
//!
//! This crate is framework-agnostic: it defines the catalog and
//! conversation domain, the gateway port the adapters implement, and
//! the two services the presentation layer binds to. No HTTP, no
//! filesystem, no UI toolkit.

pub mod domain;
pub mod events;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    AssignmentRequest, Book, BookId, CatalogPage, Conversation, NewBook, Turn, TurnRole,
    ValidationError, page_window,
};
pub use events::AppEvent;
pub use ports::{
    AppEventEmitter, AssignmentReceipt, BookPage, BookQuery, GatewayError, GatewayResult,
    NoopEmitter, RemoteGatewayPort, SessionStorePort, UserProfile,
};
pub use services::{
    ASSISTANT_UNAVAILABLE_REPLY, CatalogController, CatalogError, ConversationSession,
    DEFAULT_PAGE_SIZE, PageLoad, SendOutcome, opening_prompt,
};
