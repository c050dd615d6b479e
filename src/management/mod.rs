//! Stateful pieces of the CLI: the credential file and the login flow.

mod credentials;
mod login;

pub use credentials::CredentialStore;
pub use credentials::credential_path_for;
pub use credentials::resolve_path;
pub use login::CallbackOutcome;
pub use login::FlowState;
pub use login::LoginFlow;
pub use login::verify_callback;
