//! Whoami command - display the authenticated identity

use crate::commands::require_auth;
use crate::error::{CliError, CliResult};
use crate::output::print_key_value;
use clap::Args;
use serde::Serialize;

/// Arguments for the whoami command
#[derive(Args)]
pub struct WhoamiArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for whoami
#[derive(Serialize)]
struct WhoamiOutput {
    account_name: String,
    display_name: Option<String>,
    mail: Option<String>,
    dn: String,
    group_count: usize,
}

/// Execute the whoami command
pub async fn execute(args: WhoamiArgs) -> CliResult<()> {
    let auth = require_auth().await?;
    let user = auth.user().ok_or(CliError::NotAuthenticated)?;

    if args.json {
        let output = WhoamiOutput {
            account_name: user.sam_account_name.clone(),
            display_name: user.display_name.clone(),
            mail: user.mail.clone(),
            dn: user.dn.clone(),
            group_count: user.member_of.len(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!();
        print_key_value("Account", &user.sam_account_name);
        print_key_value("Name", user.label());
        if let Some(mail) = &user.mail {
            print_key_value("Mail", mail);
        }
        print_key_value("DN", &user.dn);
        print_key_value("Groups", &user.member_of.len().to_string());
        println!();
    }

    Ok(())
}
