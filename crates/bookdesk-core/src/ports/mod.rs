//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or wire-format types in any signature
//! - Auth is the gateway implementation's concern; credentials never
//!   cross these interfaces
//! - The gateway hands back already-normalized pages (paginated
//!   envelope vs bare list is resolved before data reaches the core)

pub mod event_emitter;
pub mod gateway;
pub mod session_store;

pub use event_emitter::{AppEventEmitter, NoopEmitter};
pub use gateway::{
    AssignmentReceipt, BookPage, BookQuery, GatewayError, GatewayResult, RemoteGatewayPort,
};
pub use session_store::{SessionStorePort, UserProfile};
