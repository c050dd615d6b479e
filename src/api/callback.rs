use std::sync::Arc;

use axum::{
    Extension,
    extract::Query,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    api::{CONFIRMATION_PATH, page},
    management::{CallbackOutcome, LoginFlow},
    types::CallbackParams,
    utils,
};

/// `GET /oauth/redirect`: the provider sends the browser back here with
/// `state` and `code`.
pub async fn callback(
    Query(params): Query<CallbackParams>,
    headers: HeaderMap,
    Extension(flow): Extension<Arc<LoginFlow>>,
) -> Response {
    let cookie_state = utils::cookie_value(&headers, utils::STATE_COOKIE);

    match flow.handle_callback(&params, cookie_state.as_deref()).await {
        CallbackOutcome::Saved => Redirect::temporary(CONFIRMATION_PATH).into_response(),
        CallbackOutcome::Aborted(message) => (
            StatusCode::BAD_REQUEST,
            page::render(
                "Login failed",
                &format!("{message}. No token was saved, run the login command again."),
            ),
        )
            .into_response(),
    }
}
