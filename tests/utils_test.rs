use axum::http::{HeaderMap, HeaderValue, header};
use base64::{Engine, engine::general_purpose::URL_SAFE};
use chrono::{FixedOffset, TimeZone, Utc};
use inoreader_cli::utils::*;

#[test]
fn test_generate_state() {
    let state = generate_state();

    // 16 bytes encode to 24 characters including padding
    assert_eq!(state.len(), 24);
    assert!(
        state
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '=')
    );
    assert_eq!(URL_SAFE.decode(&state).unwrap().len(), 16);

    // Two generated states should be different
    assert_ne!(state, generate_state());
}

#[test]
fn test_state_cookie() {
    let now = Utc.with_ymd_and_hms(2025, 3, 4, 10, 0, 0).unwrap();
    let cookie = state_cookie("c3RhdGU=", now);

    assert!(cookie.starts_with("oauthstate=c3RhdGU=;"));
    assert!(cookie.contains("Expires=Tue, 04 Mar 2025 10:20:00 GMT"));
    assert!(cookie.contains("Max-Age=1200"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/"));
}

#[test]
fn test_cookie_value() {
    let mut headers = HeaderMap::new();
    headers.append(header::COOKIE, HeaderValue::from_static("theme=dark; oauthstate=abc=="));
    headers.append(header::COOKIE, HeaderValue::from_static("other=1"));

    assert_eq!(cookie_value(&headers, "oauthstate").as_deref(), Some("abc=="));
    assert_eq!(cookie_value(&headers, "other").as_deref(), Some("1"));
    assert_eq!(cookie_value(&headers, "missing"), None);

    // Name must match exactly
    assert_eq!(cookie_value(&headers, "state"), None);
}

#[test]
fn test_cookie_value_without_headers() {
    assert_eq!(cookie_value(&HeaderMap::new(), STATE_COOKIE), None);
}

#[test]
fn test_feed_stream_id() {
    assert_eq!(
        feed_stream_id("https://lwn.net/headlines/rss"),
        "feed/https://lwn.net/headlines/rss"
    );

    // Stream ids pass through untouched
    assert_eq!(
        feed_stream_id("feed/https://lwn.net/headlines/rss"),
        "feed/https://lwn.net/headlines/rss"
    );
    assert_eq!(feed_stream_id(STATE_STARRED), STATE_STARRED);
}

#[test]
fn test_label_id_and_name() {
    assert_eq!(label_id("Linux"), "user/-/label/Linux");
    assert_eq!(label_id("user/1005921515/label/Linux"), "user/1005921515/label/Linux");

    assert_eq!(label_name("user/1005921515/label/Linux"), "Linux");
    assert_eq!(label_name("user/-/state/com.google/starred"), "starred");
    assert_eq!(label_name("plain"), "plain");
}

#[test]
fn test_format_timestamp() {
    assert_eq!(format_timestamp(0, &Utc), "Thu 1 Jan 1970 12:00 AM");
    assert_eq!(format_timestamp(1_136_239_445, &Utc), "Mon 2 Jan 2006 10:04 PM");

    // Converted to the given zone before formatting
    let mst = FixedOffset::west_opt(7 * 3600).unwrap();
    assert_eq!(format_timestamp(1_136_239_445, &mst), "Mon 2 Jan 2006 3:04 PM");
}

#[test]
fn test_spinner_keeps_message() {
    let pb = spinner("Fetching subscriptions...");
    assert_eq!(pb.message(), "Fetching subscriptions...");
    pb.finish_and_clear();
}
