use chrono::{Duration, Utc};
use reqwest::Client;
use url::Url;

use crate::{
    Error, Res,
    config::OAuthConfig,
    types::{CredentialRecord, Token, TokenResponse},
};

/// OAuth2 client bound to one set of endpoints.
///
/// Builds authorization URLs and talks to the token endpoint. It does not
/// hold any token itself; callers pass the [`CredentialRecord`] in.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    config: OAuthConfig,
    http: Client,
}

impl OAuthClient {
    pub fn new(config: OAuthConfig) -> Self {
        OAuthClient {
            config,
            http: Client::new(),
        }
    }

    /// Builds the provider consent URL for `state`.
    ///
    /// Pure construction, no network call. The scopes are joined with a
    /// space, which the query encoder renders as `read+write`.
    pub fn authorization_url(&self, record: &CredentialRecord, state: &str) -> Res<Url> {
        let mut url = Url::parse(&self.config.auth_url).map_err(|source| Error::InvalidEndpoint {
            url: self.config.auth_url.clone(),
            source,
        })?;

        url.query_pairs_mut()
            .append_pair("client_id", &record.client_id)
            .append_pair("redirect_uri", &self.config.redirect_url)
            .append_pair("response_type", "code")
            .append_pair("scope", &self.config.scopes.join(" "))
            .append_pair("state", state);

        Ok(url)
    }

    /// Exchanges an authorization code for a token.
    ///
    /// # Errors
    ///
    /// [`Error::TokenExchangeFailed`] on transport errors, non-success
    /// statuses (with the provider's body), undecodable responses and expiries
    /// that do not fit a timestamp.
    pub async fn exchange_code(&self, record: &CredentialRecord, code: &str) -> Res<Token> {
        let form = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.config.redirect_url.as_str()),
            ("client_id", record.client_id.as_str()),
            ("client_secret", record.client_secret.as_str()),
        ];

        self.request_token(&form)
            .await
            .and_then(|response| into_token(response, None))
            .map_err(Error::TokenExchangeFailed)
    }

    /// Mints a new access token from the stored refresh token.
    ///
    /// The provider may omit a new refresh token, in which case the current
    /// one is kept.
    pub async fn refresh(&self, record: &CredentialRecord) -> Res<Token> {
        if record.refresh_token.is_empty() {
            return Err(Error::NotAuthenticated);
        }

        let form = [
            ("grant_type", "refresh_token"),
            ("refresh_token", record.refresh_token.as_str()),
            ("client_id", record.client_id.as_str()),
            ("client_secret", record.client_secret.as_str()),
        ];

        self.request_token(&form)
            .await
            .and_then(|response| into_token(response, Some(&record.refresh_token)))
            .map_err(Error::TokenRefreshFailed)
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<TokenResponse, String> {
        let res = self
            .http
            .post(&self.config.token_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(form)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = res.status();
        let body = res.text().await.map_err(|e| e.to_string())?;

        if !status.is_success() {
            return Err(format!("{status}: {body}"));
        }

        serde_json::from_str(&body).map_err(|e| format!("unexpected token response: {e}"))
    }
}

fn into_token(response: TokenResponse, previous_refresh: Option<&str>) -> Result<Token, String> {
    let expiry = match response.expires_in.filter(|secs| *secs > 0) {
        Some(secs) => Some(
            Duration::try_seconds(secs)
                .and_then(|ttl| Utc::now().checked_add_signed(ttl))
                .ok_or_else(|| format!("expires_in out of range: {secs}"))?,
        ),
        None => None,
    };

    let refresh_token = response
        .refresh_token
        .filter(|t| !t.is_empty())
        .or_else(|| previous_refresh.map(str::to_string))
        .unwrap_or_default();

    Ok(Token {
        access_token: response.access_token,
        refresh_token,
        token_type: response.token_type.unwrap_or_else(|| "Bearer".to_string()),
        expiry,
    })
}
