use std::sync::Arc;

use tokio::{net::TcpListener, sync::oneshot};

use crate::{
    Error, Res, info,
    inoreader::OAuthClient,
    management::{CredentialStore, LoginFlow},
    server::start_login_server,
    types::CredentialRecord,
    warning,
};

/// Runs the complete OAuth2 authorization-code flow with Inoreader.
///
/// 1. Loads the credential file (application id and secret are required)
/// 2. Binds the local login server on `server_addr`
/// 3. Opens the browser on the server's start page, which redirects to the
///    consent page
/// 4. Waits for the callback, the code exchange and the confirmation page
/// 5. Shuts the server down and returns the saved record
///
/// There is no timeout: if the user never finishes the consent page the
/// command waits until it is interrupted.
///
/// # Example
///
/// ```
/// let store = CredentialStore::default_location()?;
/// let oauth = OAuthClient::new(config::OAuthConfig::from_env());
/// let record = login(&store, oauth, &config::server_addr(), true).await?;
/// ```
pub async fn login(
    store: &CredentialStore,
    oauth: OAuthClient,
    server_addr: &str,
    open_browser: bool,
) -> Res<CredentialRecord> {
    let record = store.load().await?;
    let listener = TcpListener::bind(server_addr).await.map_err(Error::Server)?;
    serve_login(listener, store.clone(), oauth, record, open_browser).await
}

/// Runs the flow on an already bound listener.
pub async fn serve_login(
    listener: TcpListener,
    store: CredentialStore,
    oauth: OAuthClient,
    record: CredentialRecord,
    open_browser: bool,
) -> Res<CredentialRecord> {
    let addr = listener.local_addr().map_err(Error::Server)?;
    let (flow, completion) = LoginFlow::new(oauth, store, record);
    let flow = Arc::new(flow);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(start_login_server(listener, flow, async move {
        let _ = shutdown_rx.await;
    }));

    let start_url = format!("http://localhost:{}/", addr.port());
    info!("Server listening on {}", start_url);

    if open_browser && webbrowser::open(&start_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            start_url
        );
    } else if !open_browser {
        info!("Open {} in your browser to log in.", start_url);
    }

    let outcome = completion.await.unwrap_or(Err(Error::LoginIncomplete));

    let _ = shutdown_tx.send(());
    match server.await {
        Ok(Err(e)) => warning!("{}", e),
        Err(e) => warning!("Login server task failed: {}", e),
        Ok(Ok(())) => {}
    }

    outcome
}
