use std::{future::Future, sync::Arc};

use axum::{Extension, Router, routing::get};
use tokio::net::TcpListener;

use crate::{Error, Res, api, management::LoginFlow};

/// Router for the three login endpoints, all sharing `flow`.
pub fn login_router(flow: Arc<LoginFlow>) -> Router {
    Router::new()
        .route(api::LOGIN_PATH, get(api::login))
        .route(api::CALLBACK_PATH, get(api::callback))
        .route(api::CONFIRMATION_PATH, get(api::done))
        .layer(Extension(flow))
}

/// Serves the login endpoints on `listener` until `shutdown` resolves.
///
/// In-flight responses (e.g. the confirmation page) are finished before
/// the listener is dropped.
pub async fn start_login_server<F>(listener: TcpListener, flow: Arc<LoginFlow>, shutdown: F) -> Res<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, login_router(flow))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(Error::Server)
}
