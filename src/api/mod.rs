//! # API Module
//!
//! HTTP handlers served by the temporary login server while an OAuth2
//! authorization-code flow is running.
//!
//! ## Endpoints
//!
//! - [`login`] - `GET /` issues the state cookie and redirects to Inoreader's
//!   consent page
//! - [`callback`] - `GET /oauth/redirect` validates the state, exchanges the
//!   code and saves the token
//! - [`done`] - `GET /go-inoreader` shows the confirmation page and releases
//!   the waiting login command
//!
//! All handlers share one [`crate::management::LoginFlow`] through an axum
//! `Extension`; see [`crate::server`] for the router.

mod callback;
mod done;
mod login;
mod page;

pub use callback::callback;
pub use done::done;
pub use login::login;

pub const LOGIN_PATH: &str = "/";
pub const CALLBACK_PATH: &str = "/oauth/redirect";
pub const CONFIRMATION_PATH: &str = "/go-inoreader";
