use tokio::sync::{Mutex, oneshot};
use url::Url;

use crate::{
    Error, Res,
    inoreader::OAuthClient,
    management::CredentialStore,
    types::{CallbackParams, CredentialRecord},
    utils, warning,
};

/// Progress of a single login attempt.
///
/// `Completed` and `Aborted` are terminal; the consent step happens at the
/// provider and is only observed when the callback arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    AwaitingUserConsent,
    AwaitingCallback,
    Exchanging,
    Completed,
    Aborted,
}

impl FlowState {
    pub fn is_terminal(self) -> bool {
        matches!(self, FlowState::Completed | FlowState::Aborted)
    }
}

/// What the callback handler should show the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    Saved,
    Aborted(String),
}

struct FlowInner {
    state: FlowState,
    record: CredentialRecord,
    issued_state: Option<String>,
}

/// One authorization-code flow.
///
/// Shared by the login server handlers. The inner lock is held across the
/// code exchange and the save, so a second callback cannot exchange again.
/// The flow resolves its completion channel exactly once: with the saved
/// record after the confirmation page, or with the error that aborted it.
pub struct LoginFlow {
    oauth: OAuthClient,
    store: CredentialStore,
    inner: Mutex<FlowInner>,
    completion: Mutex<Option<oneshot::Sender<Res<CredentialRecord>>>>,
}

impl LoginFlow {
    pub fn new(
        oauth: OAuthClient,
        store: CredentialStore,
        record: CredentialRecord,
    ) -> (Self, oneshot::Receiver<Res<CredentialRecord>>) {
        let (tx, rx) = oneshot::channel();
        let flow = LoginFlow {
            oauth,
            store,
            inner: Mutex::new(FlowInner {
                state: FlowState::Idle,
                record,
                issued_state: None,
            }),
            completion: Mutex::new(Some(tx)),
        };
        (flow, rx)
    }

    pub async fn state(&self) -> FlowState {
        self.inner.lock().await.state
    }

    /// Issues a fresh state token and returns it with the consent URL.
    ///
    /// Starting again while consent is pending replaces the earlier token.
    pub async fn begin(&self) -> Res<(String, Url)> {
        let mut inner = self.inner.lock().await;
        if !matches!(inner.state, FlowState::Idle | FlowState::AwaitingUserConsent) {
            return Err(Error::FlowFinished);
        }

        let state = utils::generate_state();
        let url = self.oauth.authorization_url(&inner.record, &state)?;
        inner.issued_state = Some(state.clone());
        inner.state = FlowState::AwaitingUserConsent;
        Ok((state, url))
    }

    /// Validates the provider's redirect and, if it belongs to this flow,
    /// exchanges the code and saves the token.
    ///
    /// `cookie_state` is the `oauthstate` cookie sent along with the request.
    /// Both it and the query `state` must equal the token issued by
    /// [`begin`](Self::begin).
    pub async fn handle_callback(
        &self,
        params: &CallbackParams,
        cookie_state: Option<&str>,
    ) -> CallbackOutcome {
        let mut inner = self.inner.lock().await;
        match inner.state {
            FlowState::AwaitingUserConsent => {}
            // No state issued yet; a later `begin` can still complete the flow.
            FlowState::Idle => return CallbackOutcome::Aborted(Error::StateMismatch.to_string()),
            _ => return CallbackOutcome::Aborted(Error::FlowFinished.to_string()),
        }
        inner.state = FlowState::AwaitingCallback;

        let issued = inner.issued_state.take();
        if let Err(e) = verify_callback(issued.as_deref(), cookie_state, params) {
            warning!(
                "{} (query: {:?}, cookie: {:?})",
                e,
                params.state.as_deref().unwrap_or(""),
                cookie_state.unwrap_or("")
            );
            inner.state = FlowState::Aborted;
            return self.abort(e).await;
        }

        let code = params.code.as_deref().unwrap_or_default();
        inner.state = FlowState::Exchanging;

        let token = match self.oauth.exchange_code(&inner.record, code).await {
            Ok(token) => token,
            Err(e) => {
                warning!("{}", e);
                inner.state = FlowState::Aborted;
                return self.abort(e).await;
            }
        };

        let mut record = inner.record.clone();
        record.apply_token(token);

        if let Err(e) = self.store.save(&record).await {
            warning!("{}", e);
            inner.state = FlowState::Aborted;
            return self.abort(e).await;
        }

        inner.record = record;
        inner.state = FlowState::Completed;
        CallbackOutcome::Saved
    }

    /// Called by the confirmation page. Releases the waiting command and
    /// reports whether a token was saved.
    pub async fn finish(&self) -> bool {
        let inner = self.inner.lock().await;
        match inner.state {
            FlowState::Completed => {
                self.complete(Ok(inner.record.clone())).await;
                true
            }
            FlowState::Aborted => false,
            _ => {
                self.complete(Err(Error::LoginIncomplete)).await;
                false
            }
        }
    }

    async fn abort(&self, error: Error) -> CallbackOutcome {
        let message = error.to_string();
        self.complete(Err(error)).await;
        CallbackOutcome::Aborted(message)
    }

    async fn complete(&self, result: Res<CredentialRecord>) {
        if let Some(tx) = self.completion.lock().await.take() {
            let _ = tx.send(result);
        }
    }
}

/// Checks a callback against the state issued for this flow.
///
/// A provider-reported error or a missing code fails even when the state
/// matches, since there is nothing to exchange.
pub fn verify_callback(
    issued: Option<&str>,
    cookie_state: Option<&str>,
    params: &CallbackParams,
) -> Res<()> {
    let Some(issued) = issued else {
        return Err(Error::StateMismatch);
    };

    if cookie_state != Some(issued) || params.state.as_deref() != Some(issued) {
        return Err(Error::StateMismatch);
    }

    if let Some(error) = &params.error {
        return Err(Error::AuthorizationDenied(error.clone()));
    }

    match params.code.as_deref() {
        Some(code) if !code.is_empty() => Ok(()),
        _ => Err(Error::MissingCode),
    }
}
