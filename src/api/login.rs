use std::sync::Arc;

use axum::{
    Extension,
    http::{StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};

use crate::{api::page, management::LoginFlow, utils, warning};

/// `GET /`: sets the state cookie and sends the browser to the consent page.
pub async fn login(Extension(flow): Extension<Arc<LoginFlow>>) -> Response {
    match flow.begin().await {
        Ok((state, url)) => (
            [(header::SET_COOKIE, utils::state_cookie(&state, chrono::Utc::now()))],
            Redirect::temporary(url.as_str()),
        )
            .into_response(),
        Err(e) => {
            warning!("Cannot start login: {}", e);
            (
                StatusCode::CONFLICT,
                page::render("Login unavailable", &e.to_string()),
            )
                .into_response()
        }
    }
}
