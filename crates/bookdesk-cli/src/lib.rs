//! CLI adapter for bookdesk.
//!
//! Thin presentation layer over the core services: argument parsing,
//! the composition root that wires the API client into the
//! controllers, credential persistence between runs, and one handler
//! module per subcommand.

pub mod bootstrap;
pub mod commands;
pub mod credentials;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
