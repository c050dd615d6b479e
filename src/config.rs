//! Configuration management for the Inoreader CLI.
//!
//! Endpoints and the login server address have built-in defaults that match
//! the public Inoreader service. Each can be overridden through an
//! environment variable, and those variables can be kept in an optional
//! `.env` file in the local data directory:
//!
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Built-in defaults
//!
//! The credential file itself is not configurable; see
//! [`crate::management::resolve_path`].

use std::{env, path::PathBuf};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8081";
pub const DEFAULT_REDIRECT_URL: &str = "http://localhost:8081/oauth/redirect";
pub const DEFAULT_AUTH_URL: &str = "https://www.inoreader.com/oauth2/auth";
pub const DEFAULT_TOKEN_URL: &str = "https://www.inoreader.com/oauth2/token";
pub const DEFAULT_API_URL: &str = "https://www.inoreader.com/reader/api/0";
pub const DEFAULT_SCOPES: [&str; 2] = ["read", "write"];

/// Loads environment variables from an optional `.env` file.
///
/// The file is looked up in the platform-specific local data directory:
/// - Linux: `~/.local/share/inoreader-cli/.env`
/// - macOS: `~/Library/Application Support/inoreader-cli/.env`
/// - Windows: `%LOCALAPPDATA%/inoreader-cli/.env`
///
/// A missing file is not an error since every value has a default. A file
/// that exists but cannot be parsed is reported as a warning so a typo does
/// not silently fall back to production endpoints.
pub async fn load_env() {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("inoreader-cli/.env");

    if !path.is_file() {
        return;
    }

    if let Err(e) = dotenv::from_path(&path) {
        crate::warning!("Ignoring {}: {}", path.display(), e);
    }
}

/// OAuth endpoints and parameters handed to [`crate::inoreader::OAuthClient`].
///
/// Passing this explicitly keeps the session testable against substitute
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthConfig {
    pub scopes: Vec<String>,
    pub redirect_url: String,
    pub auth_url: String,
    pub token_url: String,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
            redirect_url: DEFAULT_REDIRECT_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        }
    }
}

impl OAuthConfig {
    /// Builds the configuration from the `INOREADER_*` variables, falling
    /// back to the defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            scopes: defaults.scopes,
            redirect_url: var_or("INOREADER_REDIRECT_URL", defaults.redirect_url),
            auth_url: var_or("INOREADER_AUTH_URL", defaults.auth_url),
            token_url: var_or("INOREADER_TOKEN_URL", defaults.token_url),
        }
    }
}

/// Returns the address the local login server binds to.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8081"
/// ```
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the base URL of the Inoreader reader API.
pub fn api_url() -> String {
    var_or("INOREADER_API_URL", DEFAULT_API_URL.to_string())
}

fn var_or(key: &str, default: String) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}
