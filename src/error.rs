//! Error taxonomy for the Inoreader CLI.
//!
//! Configuration errors are fatal for every command, flow errors end a single
//! login attempt and request errors end a single command. The variants carry
//! enough context (paths, operations, provider responses) for the command
//! layer to print one useful line.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("credential file does not exist: {}", .0.display())]
    ConfigMissing(PathBuf),

    #[error("cannot read credential file {}: {source}", path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse credential file {}: {source}", path.display())]
    ConfigMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "the following fields are missing from {}:\n{}",
        path.display(),
        fields.iter().map(|f| format!("- {f}")).collect::<Vec<_>>().join("\n")
    )]
    ConfigIncomplete {
        path: PathBuf,
        fields: Vec<&'static str>,
    },

    #[error("cannot write credential file {}: {source}", path.display())]
    ConfigWriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot determine the home directory")]
    NoHomeDir,

    #[error("invalid OAuth state")]
    StateMismatch,

    #[error("authorization denied by provider: {0}")]
    AuthorizationDenied(String),

    #[error("callback did not carry an authorization code")]
    MissingCode,

    #[error("token exchange failed: {0}")]
    TokenExchangeFailed(String),

    #[error("token refresh failed: {0}")]
    TokenRefreshFailed(String),

    #[error("no access token stored. Please run `inoreader login`")]
    NotAuthenticated,

    #[error("login page closed before a token was saved")]
    LoginIncomplete,

    #[error("login flow already finished")]
    FlowFinished,

    #[error("invalid endpoint URL {url}: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("login server error: {0}")]
    Server(#[source] io::Error),

    #[error("{context}: {source}")]
    RequestFailed {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{context}: cannot decode response: {source}")]
    DecodeFailed {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Rejected(String),
}

impl Error {
    pub fn request(context: impl Into<String>, source: reqwest::Error) -> Self {
        Error::RequestFailed {
            context: context.into(),
            source,
        }
    }

    pub fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Error::DecodeFailed {
            context: context.into(),
            source,
        }
    }

    /// True for the configuration errors that stop every command at startup.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::ConfigMissing(_)
                | Error::ConfigUnreadable { .. }
                | Error::ConfigMalformed { .. }
                | Error::ConfigIncomplete { .. }
                | Error::NoHomeDir
        )
    }
}
