//! Inoreader CLI Library
//!
//! This library provides a command-line client for the Inoreader REST API. It
//! covers the OAuth2 login flow, persistence of the resulting token and the
//! resource calls used by the CLI to list and modify subscriptions, tags and
//! stream items.
//!
//! # Modules
//!
//! - `api` - HTTP handlers served by the local login server
//! - `cli` - Command-line interface implementations
//! - `config` - Endpoint defaults and environment overrides
//! - `error` - Error taxonomy shared by every layer
//! - `inoreader` - OAuth session and Inoreader resource clients
//! - `management` - Credential storage and the login flow state machine
//! - `server` - Local HTTP server for the OAuth callback
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use inoreader_cli::{config, management::CredentialStore};
//!
//! #[tokio::main]
//! async fn main() -> inoreader_cli::Res<()> {
//!     config::load_env().await;
//!     let record = CredentialStore::default_location()?.load().await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod inoreader;
pub mod management;
pub mod server;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Every layer of the crate reports failures through [`Error`], so the
/// command layer can print one diagnostic and pick the exit code.
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Server listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Marked {} as read", item_id);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark to stderr and exits
/// the program with code 1.
///
/// Only the command layer uses this; library code returns [`Error`] instead.
///
/// # Example
///
/// ```
/// error!("{}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark to stderr.
///
/// Used for failures that end a single operation without ending the
/// process, e.g. a rejected OAuth callback.
///
/// # Example
///
/// ```
/// warning!("Invalid OAuth state");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
