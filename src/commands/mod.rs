//! CLI subcommands

pub mod groups;
pub mod login;
pub mod logout;
pub mod membership;
pub mod search;
pub mod status;
pub mod user;
pub mod whoami;

use crate::api::ApiClient;
use crate::auth::AuthSession;
use crate::error::{CliError, CliResult};

/// Resolve the persisted session and require an authenticated identity
pub(crate) async fn require_auth() -> CliResult<AuthSession> {
    let api = ApiClient::from_defaults()?;
    let had_token = api.session().exists();

    let mut auth = AuthSession::new(api);
    auth.resolve().await?;

    if !auth.is_authenticated() {
        // A token that was present but did not survive resolution was
        // rejected by the server
        return Err(if had_token {
            CliError::SessionRejected
        } else {
            CliError::NotAuthenticated
        });
    }
    Ok(auth)
}
