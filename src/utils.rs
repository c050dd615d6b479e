use std::time::Duration;

use axum::http::{HeaderMap, header};
use base64::{Engine, engine::general_purpose::URL_SAFE};
use chrono::{DateTime, TimeZone, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;

pub const STATE_COOKIE: &str = "oauthstate";
pub const STATE_COOKIE_TTL_MINUTES: i64 = 20;

pub const STATE_READ: &str = "user/-/state/com.google/read";
pub const STATE_STARRED: &str = "user/-/state/com.google/starred";
pub const STATE_SAVED_WEB_PAGES: &str = "user/-/state/com.google/saved-web-pages";

const LABEL_PREFIX: &str = "user/-/label/";
const TIME_FORMAT_LONG: &str = "%a %-d %b %Y %-I:%M %p";

/// Generates the anti-forgery value for one login attempt: 16 random bytes,
/// base64-URL encoded.
pub fn generate_state() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    URL_SAFE.encode(bytes)
}

/// `Set-Cookie` value carrying the state token to the browser.
pub fn state_cookie(state: &str, now: DateTime<Utc>) -> String {
    let expires = now + chrono::Duration::minutes(STATE_COOKIE_TTL_MINUTES);
    format!(
        "{name}={state}; Expires={expires}; Max-Age={max_age}; Path=/; HttpOnly; SameSite=Lax",
        name = STATE_COOKIE,
        expires = expires.format("%a, %d %b %Y %H:%M:%S GMT"),
        max_age = STATE_COOKIE_TTL_MINUTES * 60,
    )
}

/// Looks up a cookie by name across every `Cookie` header of a request.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// Turns a feed URL into its stream id. Values that already are stream ids
/// (`feed/...`, `user/...`) pass through untouched.
pub fn feed_stream_id(url: &str) -> String {
    if url.starts_with("feed/") || url.starts_with("user/") {
        url.to_string()
    } else {
        format!("feed/{url}")
    }
}

/// Turns a folder or tag name into its label id.
pub fn label_id(name: &str) -> String {
    if name.starts_with("user/") {
        name.to_string()
    } else {
        format!("{LABEL_PREFIX}{name}")
    }
}

/// Last path segment of a tag/folder id, e.g. `user/1005/label/FOSS` -> `FOSS`.
pub fn label_name(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}

/// Formats a unix timestamp as `Mon 2 Jan 2006 3:04 PM` in the given zone.
pub fn format_timestamp<Tz>(secs: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp(secs, 0) {
        Some(dt) => dt.with_timezone(tz).format(TIME_FORMAT_LONG).to_string(),
        None => String::new(),
    }
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
