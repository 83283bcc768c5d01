//! Configuration management for the Spotify poster proxy.
//!
//! This module loads `.env` files and builds the [`Config`] struct that is
//! shared by reference with the Spotify client and the HTTP server. All values
//! are read once at startup; nothing in the crate reads the environment after
//! that point.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory, then in the working directory
//! 3. Application defaults

use std::{env, fmt, path::PathBuf};

pub const CLIENT_ID_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_SECRET";
pub const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";
pub const API_URL_VAR: &str = "SPOTIFY_API_URL";
pub const SERVER_ADDRESS_VAR: &str = "SERVER_ADDRESS";

pub const PLACEHOLDER_CLIENT_ID: &str = "YOUR_SPOTIFY_CLIENT_ID";
pub const PLACEHOLDER_CLIENT_SECRET: &str = "YOUR_SPOTIFY_CLIENT_SECRET";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";

/// Loads environment variables from `.env` files.
///
/// Looks for a `.env` file in the platform-specific local data directory under
/// `spotify-poster/.env` and then in the current working directory. Variables
/// that are already set in the process environment are never overwritten.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spotify-poster/.env`
/// - macOS: `~/Library/Application Support/spotify-poster/.env`
/// - Windows: `%LOCALAPPDATA%/spotify-poster/.env`
///
/// # Errors
///
/// Missing files are skipped. An error string is returned only when a file
/// exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_file_path();
    if async_fs::metadata(&path).await.is_ok() {
        dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotify-poster/.env");
    path
}

/// Runtime configuration, built once and passed by reference.
#[derive(Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    /// Token endpoint for the client-credentials exchange.
    pub token_url: String,
    /// Web API base URL, without a trailing slash.
    pub api_url: String,
    /// Address the HTTP server binds to.
    pub server_addr: String,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// Unset credentials fall back to placeholder literals so the server can
    /// start without any setup. The token exchange will then be rejected by
    /// Spotify; this fallback is a development convenience, not a security
    /// control. Use [`Config::uses_placeholder_credentials`] to detect it.
    ///
    /// # Example
    ///
    /// ```
    /// let config = Config::from_env();
    /// println!("binding to {}", config.server_addr); // e.g. "127.0.0.1:5000"
    /// ```
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var_or = |name: &str, default: &str| value_or(lookup(name), default);

        Config {
            client_id: var_or(CLIENT_ID_VAR, PLACEHOLDER_CLIENT_ID),
            client_secret: var_or(CLIENT_SECRET_VAR, PLACEHOLDER_CLIENT_SECRET),
            token_url: var_or(TOKEN_URL_VAR, DEFAULT_TOKEN_URL),
            api_url: var_or(API_URL_VAR, DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            server_addr: var_or(SERVER_ADDRESS_VAR, DEFAULT_SERVER_ADDRESS),
        }
    }

    pub fn uses_placeholder_credentials(&self) -> bool {
        self.client_id == PLACEHOLDER_CLIENT_ID || self.client_secret == PLACEHOLDER_CLIENT_SECRET
    }

    /// URL of the track metadata endpoint for `track_id`.
    pub fn track_url(&self, track_id: &str) -> String {
        format!("{uri}/tracks/{id}", uri = self.api_url, id = track_id)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("token_url", &self.token_url)
            .field("api_url", &self.api_url)
            .field("server_addr", &self.server_addr)
            .finish()
    }
}

// Empty values count as unset.
fn value_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(id: &str, secret: &str) -> Config {
        Config {
            client_id: id.to_string(),
            client_secret: secret.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            server_addr: DEFAULT_SERVER_ADDRESS.to_string(),
        }
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(config(PLACEHOLDER_CLIENT_ID, "real").uses_placeholder_credentials());
        assert!(config("real", PLACEHOLDER_CLIENT_SECRET).uses_placeholder_credentials());
        assert!(!config("id", "secret").uses_placeholder_credentials());
    }

    fn lookup(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_unset_variables_use_defaults() {
        let cfg = lookup(&[]);
        assert_eq!(cfg.client_id, PLACEHOLDER_CLIENT_ID);
        assert_eq!(cfg.client_secret, PLACEHOLDER_CLIENT_SECRET);
        assert_eq!(cfg.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.server_addr, DEFAULT_SERVER_ADDRESS);
        assert!(cfg.uses_placeholder_credentials());
    }

    #[test]
    fn test_blank_variables_count_as_unset() {
        let cfg = lookup(&[(CLIENT_ID_VAR, ""), (CLIENT_SECRET_VAR, "   ")]);
        assert_eq!(cfg.client_id, PLACEHOLDER_CLIENT_ID);
        assert_eq!(cfg.client_secret, PLACEHOLDER_CLIENT_SECRET);
    }

    #[test]
    fn test_set_variables_are_used() {
        let cfg = lookup(&[
            (CLIENT_ID_VAR, "my_id"),
            (CLIENT_SECRET_VAR, "my_secret"),
            (TOKEN_URL_VAR, "http://x/token"),
            (SERVER_ADDRESS_VAR, "0.0.0.0:8080"),
        ]);
        assert_eq!(cfg.client_id, "my_id");
        assert_eq!(cfg.client_secret, "my_secret");
        assert_eq!(cfg.token_url, "http://x/token");
        assert_eq!(cfg.server_addr, "0.0.0.0:8080");
        assert!(!cfg.uses_placeholder_credentials());
    }

    #[test]
    fn test_api_url_trailing_slash_is_trimmed() {
        let cfg = lookup(&[(API_URL_VAR, "http://x/v1/")]);
        assert_eq!(cfg.api_url, "http://x/v1");
        assert_eq!(cfg.track_url("abc"), "http://x/v1/tracks/abc");
    }

    #[test]
    fn test_value_or() {
        assert_eq!(value_or(None, "fallback"), "fallback");
        assert_eq!(value_or(Some(" \t".to_string()), "fallback"), "fallback");
        assert_eq!(value_or(Some("set".to_string()), "fallback"), "set");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let printed = format!("{:?}", config("visible_id", "hunter2"));
        assert!(printed.contains("visible_id"));
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_track_url() {
        let cfg = config("id", "secret");
        assert_eq!(
            cfg.track_url("3n3Ppam7vgaVa1iaRUc9Lp"),
            "https://api.spotify.com/v1/tracks/3n3Ppam7vgaVa1iaRUc9Lp"
        );
    }
}
