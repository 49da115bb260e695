//! Login command - authenticate against the directory service

use crate::api::ApiClient;
use crate::auth::AuthSession;
use crate::error::{CliError, CliResult};
use crate::output::{print_info, print_success};
use clap::Args;
use dialoguer::{Input, Password};

/// Arguments for the login command
#[derive(Args)]
pub struct LoginArgs {
    /// Account name to authenticate as (prompted if omitted)
    #[arg(long, short)]
    pub username: Option<String>,
}

/// Execute the login command
pub async fn execute(args: LoginArgs) -> CliResult<()> {
    let api = ApiClient::from_defaults()?;
    let mut auth = AuthSession::new(api);

    // A persisted valid session means nothing to do
    auth.resolve().await?;
    if let Some(user) = auth.user() {
        print_info(&format!(
            "Already logged in as {}. Run 'diradm logout' first to switch accounts.",
            user.label()
        ));
        return Ok(());
    }

    let username = match args.username {
        Some(username) => username,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;

    let outcome = auth.login(&username, &password).await;
    if !outcome.success {
        return Err(CliError::AuthenticationFailed(
            outcome.message.unwrap_or_else(|| "Login failed".to_string()),
        ));
    }

    let label = auth
        .user()
        .map(|u| u.label().to_string())
        .unwrap_or(username);
    print_success(&format!("Logged in as {label}"));
    Ok(())
}
