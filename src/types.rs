use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use tabled::Tabled;

/// Contents of the credential file.
///
/// The two application fields are seeded by the user; the four token fields
/// are written by the login flow. `app_id` / `app_key` are the key names used
/// by older credential files and are still accepted on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    #[serde(default, alias = "app_id")]
    pub client_id: String,
    #[serde(default, alias = "app_key")]
    pub client_secret: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expiry: Option<DateTime<Utc>>,
}

impl CredentialRecord {
    /// Names of the required application fields that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.client_id.trim().is_empty() {
            missing.push("client_id");
        }
        if self.client_secret.trim().is_empty() {
            missing.push("client_secret");
        }
        missing
    }

    /// Replaces the token fields, leaving the application credentials alone.
    pub fn apply_token(&mut self, token: Token) {
        self.access_token = token.access_token;
        self.refresh_token = token.refresh_token;
        self.token_type = token.token_type;
        self.expiry = token.expiry;
    }

    pub fn has_access_token(&self) -> bool {
        !self.access_token.is_empty()
    }
}

/// Result of a code exchange or a refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expiry: Option<DateTime<Utc>>,
}

/// Raw token endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// Query parameters of the provider's redirect back to the login server.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    pub state: Option<String>,
    pub code: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_id: String,
    pub user_name: String,
    pub user_profile_id: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub is_blogger_user: bool,
    #[serde(default)]
    pub signup_time_sec: i64,
    #[serde(default)]
    pub is_multi_login_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAdd {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub num_results: u32,
    #[serde(default)]
    pub stream_id: String,
    #[serde(default)]
    pub stream_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionList {
    pub subscriptions: Vec<Subscription>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub html_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreadCounters {
    #[serde(default)]
    pub max: u64,
    pub unreadcounts: Vec<UnreadCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCount {
    pub id: String,
    #[serde(deserialize_with = "count_from_number_or_string")]
    pub count: u64,
    #[serde(default)]
    pub newest_item_timestamp_usec: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagList {
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    #[serde(default)]
    pub sortid: String,
    #[serde(default)]
    pub unread_count: u64,
    #[serde(default, rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamContents {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<StreamItem>,
    #[serde(default)]
    pub continuation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub published: i64,
    #[serde(default)]
    pub canonical: Vec<Link>,
    #[serde(default)]
    pub origin: Option<Origin>,
}

impl StreamItem {
    pub fn url(&self) -> &str {
        self.canonical.last().map(|l| l.href.as_str()).unwrap_or("")
    }

    pub fn feed_title(&self) -> &str {
        self.origin.as_ref().map(|o| o.title.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Origin {
    #[serde(default)]
    pub stream_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub html_url: String,
}

#[derive(Tabled)]
pub struct SubscriptionTableRow {
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "# unread")]
    pub unread: u64,
    #[tabled(rename = "Folders")]
    pub folders: String,
    #[tabled(rename = "URL")]
    pub url: String,
}

#[derive(Tabled)]
pub struct TagTableRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Type")]
    pub kind: String,
    #[tabled(rename = "# unread")]
    pub unread: u64,
}

#[derive(Tabled)]
pub struct StreamUrlRow {
    #[tabled(rename = "Feed")]
    pub feed: String,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "URL")]
    pub url: String,
}

#[derive(Tabled)]
pub struct StreamIdRow {
    #[tabled(rename = "Feed")]
    pub feed: String,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Item ID")]
    pub item_id: String,
}

#[derive(Tabled)]
pub struct StreamDateRow {
    #[tabled(rename = "Feed")]
    pub feed: String,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Date")]
    pub date: String,
}

#[derive(Tabled)]
pub struct WebPageUrlRow {
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "URL")]
    pub url: String,
}

#[derive(Tabled)]
pub struct WebPageIdRow {
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Item ID")]
    pub item_id: String,
}

#[derive(Tabled)]
pub struct KeyValueRow {
    #[tabled(rename = "Field")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

// The unread-count endpoint has returned counts both as numbers and as strings.
fn count_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| de::Error::custom(format!("invalid count {n}"))),
        Value::String(s) => s.trim().parse().map_err(de::Error::custom),
        other => Err(de::Error::custom(format!("invalid count {other}"))),
    }
}
