//! Groups command - list or search the group catalog

use crate::commands::require_auth;
use crate::error::{CliError, CliResult};
use crate::models::Group;
use crate::output::{print_info, truncate};
use clap::{Args, Subcommand};

/// Arguments for the groups command
#[derive(Args)]
pub struct GroupsArgs {
    #[command(subcommand)]
    pub command: GroupsCommand,
}

#[derive(Subcommand)]
pub enum GroupsCommand {
    /// List the group catalog
    List {
        /// Scope the listing to a base DN (defaults to the configured one)
        #[arg(long)]
        base_dn: Option<String>,
    },
    /// Search groups by common name or account name
    Search {
        /// Search text
        query: String,
    },
}

/// Execute the groups command
pub async fn execute(args: GroupsArgs) -> CliResult<()> {
    let auth = require_auth().await?;
    let api = auth.api();

    let response = match &args.command {
        GroupsCommand::List { base_dn } => {
            let base_dn = base_dn
                .as_deref()
                .or(api.config().base_dn.as_deref());
            api.all_groups(base_dn).await?
        }
        GroupsCommand::Search { query } => {
            if query.chars().count() < 2 {
                return Err(CliError::Validation(
                    "Search query must be at least 2 characters.".to_string(),
                ));
            }
            api.search_groups(query).await?
        }
    };

    if !response.success {
        return Err(CliError::Server(
            response
                .error
                .unwrap_or_else(|| "Group lookup failed".to_string()),
        ));
    }

    let groups = response.groups.unwrap_or_default();
    if groups.is_empty() {
        print_info("No groups found.");
        return Ok(());
    }

    print_group_table(&groups);
    println!("\n  {} group(s)", groups.len());
    Ok(())
}

fn print_group_table(groups: &[Group]) {
    println!("  {:<30} {:<50}", "Name", "Description");
    for group in groups {
        println!(
            "  {:<30} {:<50}",
            truncate(&group.cn, 30),
            truncate(group.description.as_deref().unwrap_or("-"), 50),
        );
    }
}
