//! # CLI Module
//!
//! Command implementations behind `main.rs`. Each command loads the
//! credential file, builds an authenticated [`Session`], calls one resource
//! client and renders the result as a table or a one-line confirmation.
//!
//! ## Commands
//!
//! - [`login`] - OAuth2 login through the local callback server
//! - [`list_subscriptions`], [`list_tags`], [`list_stream`] - listings
//! - [`mark_item`], [`mark_stream_read`] - item state
//! - [`add_subscription`], [`edit_subscription`] - subscription management
//! - [`rename_tag`], [`delete_tag`] - tag management
//! - [`user_info`], [`examples`] - information
//!
//! Every command returns [`crate::Res`]; `main` prints the error and exits
//! non-zero, so a failed command never prints a partial table.

mod auth;
mod examples;
mod items;
mod stream;
mod subscriptions;
mod tags;
mod user;

pub use auth::login;
pub use examples::examples;
pub use items::mark_item;
pub use items::mark_stream_read;
pub use stream::StreamView;
pub use stream::list_stream;
pub use stream::render_stream;
pub use subscriptions::add_subscription;
pub use subscriptions::edit_subscription;
pub use subscriptions::list_subscriptions;
pub use subscriptions::subscription_rows;
pub use tags::TagKind;
pub use tags::delete_tag;
pub use tags::list_tags;
pub use tags::rename_tag;
pub use tags::tag_rows;
pub use user::user_info;

use crate::{
    Res, config,
    inoreader::{OAuthClient, Session},
    management::CredentialStore,
};

/// Loads the credential file and builds a session that writes refreshed
/// tokens back to it.
async fn session() -> Res<Session> {
    let store = CredentialStore::default_location()?;
    let record = store.load().await?;
    let oauth = OAuthClient::new(config::OAuthConfig::from_env());
    Ok(Session::new(oauth, record, config::api_url()).with_store(store))
}
