//! Configuration management for the bulk popularity checker.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials and
//! endpoint URLs.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (endpoint URLs only; credentials have no default)

use dotenv;
use std::{env, path::PathBuf};

use crate::error::CheckError;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spopcli/.env`. This allows users to store the
/// client credentials securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spopcli/.env`
/// - macOS: `~/Library/Application Support/spopcli/.env`
/// - Windows: `%LOCALAPPDATA%/spopcli/.env`
///
/// A missing `.env` file is not an error; credentials may also be supplied
/// directly through the process environment.
///
/// # Returns
///
/// Returns `Ok(())` if the environment is usable, or an error string if
/// directory creation fails.
///
/// # Example
///
/// ```
/// use spopcli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spopcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // env vars set in the shell still win over the file
    let _ = dotenv::from_path(path);
    Ok(())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform.
///
/// # Errors
///
/// Returns [`CheckError::MissingCredentials`] if the variable is unset or
/// empty. Credentials are checked before any other work happens, so this is
/// the first thing a misconfigured installation hits.
pub fn spotify_client_id() -> Result<String, CheckError> {
    require_credential("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable which
/// contains the client secret obtained when registering the application with
/// Spotify's developer platform.
///
/// # Errors
///
/// Returns [`CheckError::MissingCredentials`] if the variable is unset or
/// empty.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> Result<String, CheckError> {
    require_credential("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// Verifies that both client credentials are configured.
///
/// Commands call this before touching the input or the network, so a
/// misconfigured installation fails immediately even when a cached token
/// could still have served the run.
///
/// # Errors
///
/// Returns [`CheckError::MissingCredentials`] naming the first variable that
/// is unset or empty.
pub fn ensure_credentials() -> Result<(), CheckError> {
    spotify_client_id()?;
    spotify_client_secret()?;
    Ok(())
}

fn require_credential(var: &str) -> Result<String, CheckError> {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(CheckError::MissingCredentials(var.to_string())),
    }
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable, falling back to the
/// production endpoint. Overriding the URL is mainly useful for pointing the
/// client at a local stub during development.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable, falling back
/// to the production accounts endpoint. This is where client credentials are
/// exchanged for an access token.
///
/// # Example
///
/// ```
/// let token_url = spotify_apitoken_url(); // "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}
