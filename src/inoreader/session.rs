use chrono::{Duration, Utc};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::{
    Error, Res,
    inoreader::OAuthClient,
    management::CredentialStore,
    types::CredentialRecord,
    warning,
};

/// Seconds before the recorded expiry at which a token counts as expired.
const EXPIRY_LEEWAY_SECS: i64 = 60;

/// Authenticated handle for the reader API.
///
/// Attaches the stored access token as bearer credential. An expired token is
/// refreshed before the request; a `401` triggers one refresh and one retry.
pub struct Session {
    http: Client,
    oauth: OAuthClient,
    api_url: String,
    record: Mutex<CredentialRecord>,
    store: Option<CredentialStore>,
}

impl Session {
    pub fn new(oauth: OAuthClient, record: CredentialRecord, api_url: impl Into<String>) -> Self {
        Session {
            http: Client::new(),
            oauth,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            record: Mutex::new(record),
            store: None,
        }
    }

    /// Writes refreshed tokens back to `store`.
    pub fn with_store(mut self, store: CredentialStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Snapshot of the record the session currently holds.
    pub async fn record(&self) -> CredentialRecord {
        self.record.lock().await.clone()
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        context: &str,
    ) -> Res<T> {
        let res = self.send(Method::GET, path, query, context).await?;
        decode(res, context).await
    }

    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        context: &str,
    ) -> Res<T> {
        let res = self.send(Method::POST, path, query, context).await?;
        decode(res, context).await
    }

    /// POST whose body is ignored (the API answers `OK` as plain text).
    pub async fn post(&self, path: &str, query: &[(&str, &str)], context: &str) -> Res<()> {
        self.send(Method::POST, path, query, context).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        context: &str,
    ) -> Res<Response> {
        let token = self.access_token().await?;
        let res = self.dispatch(method.clone(), path, query, &token, context).await?;

        let res = if res.status() == StatusCode::UNAUTHORIZED {
            let token = self.force_refresh().await?;
            self.dispatch(method, path, query, &token, context).await?
        } else {
            res
        };

        res.error_for_status()
            .map_err(|e| Error::request(context, e))
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        token: &str,
        context: &str,
    ) -> Res<Response> {
        let url = format!("{}/{}", self.api_url, path.trim_start_matches('/'));
        self.http
            .request(method, &url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::request(context, e))
    }

    async fn access_token(&self) -> Res<String> {
        let mut record = self.record.lock().await;
        if !record.has_access_token() && record.refresh_token.is_empty() {
            return Err(Error::NotAuthenticated);
        }

        if !record.has_access_token() || is_expired(&record) {
            self.refresh_locked(&mut record).await?;
        }

        Ok(record.access_token.clone())
    }

    async fn force_refresh(&self) -> Res<String> {
        let mut record = self.record.lock().await;
        self.refresh_locked(&mut record).await?;
        Ok(record.access_token.clone())
    }

    async fn refresh_locked(&self, record: &mut CredentialRecord) -> Res<()> {
        let token = self.oauth.refresh(record).await?;
        record.apply_token(token);

        if let Some(store) = &self.store {
            if let Err(e) = store.save(record).await {
                warning!("Refreshed token could not be saved: {}", e);
            }
        }

        Ok(())
    }
}

/// True when the token expires within the leeway. Tokens without an expiry
/// never expire.
pub fn is_expired(record: &CredentialRecord) -> bool {
    record
        .expiry
        .is_some_and(|expiry| expiry - Duration::seconds(EXPIRY_LEEWAY_SECS) <= Utc::now())
}

async fn decode<T: DeserializeOwned>(res: Response, context: &str) -> Res<T> {
    let body = res.text().await.map_err(|e| Error::request(context, e))?;
    serde_json::from_str(&body).map_err(|e| Error::decode(context, e))
}
