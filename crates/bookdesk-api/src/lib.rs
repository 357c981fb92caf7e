//! Remote data gateway adapter for the bookdesk book-management API.
//!
//! This crate implements the core-owned [`bookdesk_core::ports::RemoteGatewayPort`]
//! against the REST API: wire DTOs, URL construction, response-shape
//! normalization, error mapping, and the token store the HTTP backend
//! injects bearer headers from. Consumers interact with it through the
//! port trait; login and logout are the only adapter-specific entry
//! points.

mod auth;
mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// Client
pub use client::{ApiClient, DefaultApiClient};

// Configuration
pub use config::ApiClientConfig;

// Errors (login/logout are adapter-level calls, so their error type is public)
pub use error::{ApiError, ApiResult};

// Auth/session
pub use auth::{TokenPair, TokenStore};
