//! # Inoreader Integration Module
//!
//! Client side of the Inoreader API: OAuth2 authorization, the authenticated
//! session and one thin request/decode module per REST resource.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer
//!     ↓
//! Resource clients (user, subscriptions, tags, stream)
//!     ↓
//! Session (bearer token, refresh on expiry or 401)
//!     ↓
//! OAuthClient (authorization URL, code exchange, refresh)
//!     ↓
//! reqwest
//! ```
//!
//! ## Modules
//!
//! - [`auth`] - runs the login flow end to end
//! - [`oauth`] - authorization URL and token endpoint calls
//! - [`session`] - authenticated HTTP client for the reader API
//! - [`user`], [`subscriptions`], [`tags`], [`stream`] - resource clients
//!
//! Resource errors are wrapped with the operation that failed and returned
//! as-is; nothing in this module retries beyond the single token refresh.

pub mod auth;
pub mod oauth;
pub mod session;
pub mod stream;
pub mod subscriptions;
pub mod tags;
pub mod user;

pub use oauth::OAuthClient;
pub use session::Session;
