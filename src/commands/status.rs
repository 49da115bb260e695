//! Status command - service health and session state

use crate::api::ApiClient;
use crate::auth::AuthSession;
use crate::error::CliResult;
use crate::output::print_key_value;
use clap::Args;
use serde::Serialize;

/// Arguments for the status command
#[derive(Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct StatusOutput {
    endpoint: String,
    healthy: bool,
    authenticated: bool,
    account: Option<String>,
}

/// Execute the status command
pub async fn execute(args: StatusArgs) -> CliResult<()> {
    let api = ApiClient::from_defaults()?;
    let endpoint = api.config().api_url.clone();
    let healthy = api.health_check().await;

    let mut auth = AuthSession::new(api);
    auth.resolve().await?;
    let account = auth.user().map(|u| u.sam_account_name.clone());

    if args.json {
        let output = StatusOutput {
            endpoint,
            healthy,
            authenticated: auth.is_authenticated(),
            account,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    print_key_value("Endpoint", &endpoint);
    print_key_value("Health", if healthy { "healthy" } else { "unreachable" });
    match account {
        Some(account) => print_key_value("Session", &format!("authenticated as {account}")),
        None => print_key_value("Session", "not logged in"),
    }
    println!();

    Ok(())
}
