use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;

use crate::{
    config::Config,
    error::{PosterError, Result},
    types::ClientCredentialsToken,
};

/// Builds the `Authorization` header value for the client-credentials grant.
///
/// Encodes `"{client_id}:{client_secret}"` with standard, padded Base64 and
/// prefixes it with `Basic `. Any two strings are accepted.
///
/// # Example
///
/// ```
/// assert_eq!(basic_authorization("id", "secret"), "Basic aWQ6c2VjcmV0");
/// ```
pub fn basic_authorization(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials.as_bytes()))
}

/// Requests an app access token with the client-credentials grant.
///
/// A fresh token is requested on every call; nothing is cached between
/// calls and the token's `expires_in` is ignored.
///
/// # Arguments
///
/// * `client` - HTTP client used for the request
/// * `config` - Supplies the credentials and the token endpoint
///
/// # Returns
///
/// - `Ok(String)` - The `access_token` field of the response
/// - `Err(PosterError::UpstreamAuth)` - The endpoint answered with a non-success status
/// - `Err(PosterError::MalformedResponse)` - The body is not JSON or lacks `access_token`
/// - `Err(PosterError::Transport)` - The request could not be completed
///
/// # API Documentation
///
/// Uses Spotify's `POST /api/token` endpoint with the "client_credentials"
/// grant type as specified in RFC 6749 section 4.4.
pub async fn client_credentials_token(client: &Client, config: &Config) -> Result<String> {
    let res = client
        .post(&config.token_url)
        .header(
            reqwest::header::AUTHORIZATION,
            basic_authorization(&config.client_id, &config.client_secret),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;
    if !status.is_success() {
        return Err(PosterError::UpstreamAuth { status, body });
    }

    let token: ClientCredentialsToken = serde_json::from_str(&body).map_err(|e| {
        PosterError::MalformedResponse(format!("token response without access_token: {}", e))
    })?;

    Ok(token.access_token)
}
