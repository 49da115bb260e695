//! Logout command - end the session and clear the stored token

use crate::api::ApiClient;
use crate::auth::AuthSession;
use crate::error::CliResult;
use crate::output::{print_info, print_success};
use clap::Args;

/// Arguments for the logout command
#[derive(Args)]
pub struct LogoutArgs {}

/// Execute the logout command
pub async fn execute(_args: LogoutArgs) -> CliResult<()> {
    let api = ApiClient::from_defaults()?;

    if !api.session().exists() {
        print_info("You are not logged in.");
        return Ok(());
    }

    // Remote end-session is best-effort; local state is cleared regardless
    let mut auth = AuthSession::new(api);
    auth.logout().await?;

    print_success("Session cleared. Logged out successfully.");
    Ok(())
}
