use std::path::PathBuf;

use chrono::Utc;

use crate::{spotify, types::Token};

/// Holds the client-credentials access token for one invocation and keeps a
/// cached copy on disk so consecutive runs within the token's lifetime skip
/// the token exchange.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    /// Loads the cached token, or requests a fresh one when there is no cache
    /// or the cached token has expired.
    pub async fn obtain() -> Result<Self, String> {
        if let Ok(manager) = Self::load().await {
            if !manager.is_expired() {
                return Ok(manager);
            }
        }

        let token = spotify::auth::request_token().await?;
        let manager = Self::new(token);
        let _ = manager.persist().await;
        Ok(manager)
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(Self::token_path(), json)
            .await
            .map_err(|e| e.to_string())
    }

    /// Returns a usable access token, requesting a new one if the current one
    /// is expired. Client-credentials tokens carry no refresh token; expiry
    /// means a full re-request.
    pub async fn get_valid_token(&mut self) -> String {
        if self.is_expired() {
            if let Ok(new_token) = spotify::auth::request_token().await {
                self.token = new_token;
                let _ = self.persist().await;
            }
        }

        self.token.access_token.clone()
    }

    fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.token.obtained_at + self.token.expires_in - 240
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spopcli/cache/token.json");
        path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
