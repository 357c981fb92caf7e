//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired
//! together for the CLI adapter: the token store is loaded from the
//! credentials file, the API client is built around it, and the two
//! core services are composed over the client through the gateway
//! port. Command handlers receive the composed `CliContext` and
//! delegate work to it.

use std::path::PathBuf;
use std::sync::Arc;

use bookdesk_api::{ApiClientConfig, DefaultApiClient, TokenStore};
use bookdesk_core::ports::{AppEventEmitter, NoopEmitter, RemoteGatewayPort};
use bookdesk_core::services::{CatalogController, ConversationSession};

use crate::credentials;
use crate::error::CliError;

/// Default base URL when neither the flag nor the environment sets
/// one.
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Base URL of the book-management API.
    pub api_url: String,
}

impl CliConfig {
    /// Resolve the configuration: the `--api-url` flag wins, then the
    /// `BOOKDESK_API_URL` environment variable (dotenv is loaded by
    /// `main` before parsing), then the local default.
    #[must_use]
    pub fn with_defaults(api_url_flag: Option<String>) -> Self {
        let api_url = api_url_flag
            .or_else(|| std::env::var("BOOKDESK_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { api_url }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The concrete API client, for the adapter-level login/logout
    /// calls.
    pub client: Arc<DefaultApiClient>,
    /// Session queries (login state, current user).
    pub session: Arc<TokenStore>,
    /// The gateway port, for direct reads the controllers don't cache.
    pub gateway: Arc<dyn RemoteGatewayPort>,
    /// Catalog and assignment state holder.
    pub catalog: CatalogController,
    /// Conversation state holder.
    pub conversation: ConversationSession,
    /// Where the session tokens persist between runs.
    pub credentials_path: PathBuf,
}

/// Bootstrap the CLI application.
///
/// Loads any persisted token pair into a fresh [`TokenStore`], builds
/// the API client around it, and composes the controllers. The CLI
/// renders results directly, so events go to the no-op emitter.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    tracing::debug!(api_url = %config.api_url, "bootstrapping CLI context");
    let credentials_path = credentials::credentials_path()?;
    let session = Arc::new(match credentials::load(&credentials_path) {
        Some(pair) => TokenStore::with_tokens(pair),
        None => TokenStore::new(),
    });

    let api_config = ApiClientConfig::new().with_base_url(config.api_url.clone());
    let client = Arc::new(DefaultApiClient::new(&api_config, session.clone()));
    let gateway: Arc<dyn RemoteGatewayPort> = client.clone();

    let emitter: Arc<dyn AppEventEmitter> = Arc::new(NoopEmitter);
    let catalog = CatalogController::new(gateway.clone(), emitter.clone());
    let conversation = ConversationSession::new(gateway.clone(), emitter);

    Ok(CliContext {
        client,
        session,
        gateway,
        catalog,
        conversation,
        credentials_path,
    })
}
