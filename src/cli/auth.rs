use crate::{
    Res, config,
    inoreader::{OAuthClient, auth},
    management::CredentialStore,
    success,
};

pub async fn login(open_browser: bool) -> Res<()> {
    let store = CredentialStore::default_location()?;
    let oauth = OAuthClient::new(config::OAuthConfig::from_env());

    auth::login(&store, oauth, &config::server_addr(), open_browser).await?;

    success!("Authentication successful! Token saved to {}", store.path().display());
    Ok(())
}
