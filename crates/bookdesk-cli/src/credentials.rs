//! Token-pair persistence between CLI runs.
//!
//! The JWT pair lives in a JSON file under the user config directory.
//! A missing or unreadable file just means "logged out".

use std::fs;
use std::path::{Path, PathBuf};

use bookdesk_api::TokenPair;

use crate::error::CliError;

/// Where the session tokens are stored.
pub fn credentials_path() -> Result<PathBuf, CliError> {
    dirs::config_dir()
        .map(|dir| dir.join("bookdesk").join("credentials.json"))
        .ok_or_else(|| {
            CliError::Config("could not determine the user config directory".to_string())
        })
}

/// Load the persisted token pair, if a readable one exists.
pub fn load(path: &Path) -> Option<TokenPair> {
    let raw = fs::read_to_string(path).ok()?;
    serde_json::from_str(&raw).ok()
}

/// Persist the token pair for the next run.
pub fn save(path: &Path, pair: &TokenPair) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string_pretty(pair)
        .map_err(|e| CliError::Io(format!("could not serialize credentials: {e}")))?;
    fs::write(path, raw)?;
    Ok(())
}

/// Forget the persisted token pair.
pub fn delete(path: &Path) -> Result<(), CliError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
