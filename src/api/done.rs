use std::sync::Arc;

use axum::{Extension, response::Html};

use crate::{api::page, management::LoginFlow};

/// `GET /go-inoreader`: confirmation page, ends the login command.
pub async fn done(Extension(flow): Extension<Arc<LoginFlow>>) -> Html<String> {
    if flow.finish().await {
        page::render(
            "Done",
            "You may close this page and return to inoreader in your terminal.",
        )
    } else {
        page::render(
            "Not logged in",
            "No token was saved. You may close this page and run the login command again.",
        )
    }
}
