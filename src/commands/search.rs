//! Search command - find identities by name or mail

use crate::commands::require_auth;
use crate::error::{CliError, CliResult};
use crate::output::{print_info, truncate};
use clap::Args;

/// Arguments for the search command
#[derive(Args)]
pub struct SearchArgs {
    /// Search text, matched against account name, display name, and mail
    pub query: String,
}

/// Execute the search command
pub async fn execute(args: SearchArgs) -> CliResult<()> {
    if args.query.chars().count() < 2 {
        return Err(CliError::Validation(
            "Search query must be at least 2 characters.".to_string(),
        ));
    }

    let auth = require_auth().await?;
    let response = auth.api().search_users(&args.query).await?;

    if !response.success {
        return Err(CliError::Server(
            response
                .error
                .unwrap_or_else(|| "Search failed".to_string()),
        ));
    }

    let entries = response.entries.unwrap_or_default();
    if entries.is_empty() {
        print_info("No matching users found.");
        return Ok(());
    }

    println!("  {:<20} {:<30} {:<30}", "Account", "Name", "Mail");
    for entry in &entries {
        println!(
            "  {:<20} {:<30} {:<30}",
            truncate(entry.account_name(), 20),
            truncate(entry.first("displayName").unwrap_or("-"), 30),
            truncate(entry.first("mail").unwrap_or("-"), 30),
        );
    }
    println!("\n  {} result(s)", entries.len());

    Ok(())
}
