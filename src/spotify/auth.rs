use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::config;

/// Requests an application access token via the Client Credentials flow.
///
/// Sends `grant_type=client_credentials` to the token endpoint with the
/// client ID and secret as an HTTP Basic `Authorization` header. The
/// resulting token grants access to public catalog data only, which is all
/// the popularity checker needs.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Fresh access token with its expiry metadata
/// - `Err(String)` - Missing credentials, network error, or a token response
///   without an `access_token` field (typically invalid credentials)
///
/// # Token Contents
///
/// The returned token includes:
/// - Access token for API authentication
/// - Token type (always "Bearer")
/// - Expiration time in seconds (typically 3600)
/// - Timestamp when the token was obtained
///
/// # Example
///
/// ```
/// let token = request_token().await?;
/// println!("Token expires in {} seconds", token.expires_in);
/// ```
pub async fn request_token() -> Result<crate::types::Token, String> {
    let client_id = config::spotify_client_id().map_err(|e| e.to_string())?;
    let client_secret = config::spotify_client_secret().map_err(|e| e.to_string())?;

    let basic = STANDARD.encode(format!("{}:{}", client_id, client_secret));

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .header("Authorization", format!("Basic {}", basic))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;

    let access_token = json["access_token"]
        .as_str()
        .ok_or_else(|| {
            format!(
                "token response carried no access token: {}",
                json["error_description"].as_str().unwrap_or("unknown error")
            )
        })?
        .to_string();

    Ok(crate::types::Token {
        access_token,
        token_type: json["token_type"].as_str().unwrap_or("Bearer").to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
