//! User command - display an identity's profile and memberships

use crate::commands::require_auth;
use crate::error::{CliError, CliResult};
use crate::models::User;
use crate::output::{print_header, print_key_value, truncate};
use crate::reconcile::MembershipEditor;
use chrono::{DateTime, NaiveDateTime, Utc};
use clap::Args;

/// Arguments for the user command
#[derive(Args)]
pub struct UserArgs {
    /// Account name of the identity to display
    pub account_name: String,

    /// Output the raw identity as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the user command
pub async fn execute(args: UserArgs) -> CliResult<()> {
    let auth = require_auth().await?;
    let api = auth.api();

    let response = api.get_user(&args.account_name).await?;
    let user = match (response.success, response.user) {
        (true, Some(user)) => user,
        _ => {
            return Err(CliError::NotFound(
                response
                    .error
                    .unwrap_or_else(|| format!("User not found: {}", args.account_name)),
            ))
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }

    print_profile(&user);

    // Membership table, catalog-resolved like the editor view
    let catalog = match api.all_groups(api.config().base_dn.as_deref()).await {
        Ok(response) if response.success => response.groups.unwrap_or_default(),
        _ => Vec::new(),
    };
    let editor = MembershipEditor::new(&user, &catalog);

    print_header("Group Membership");
    if editor.rows().is_empty() {
        println!("  No group memberships found");
    } else {
        println!("  {:<30} {:<40} {:<8}", "Name", "Description", "Type");
        for row in editor.rows() {
            println!(
                "  {:<30} {:<40} {:<8}",
                truncate(&row.group.cn, 30),
                truncate(row.group.description.as_deref().unwrap_or("-"), 40),
                row.membership_type
            );
        }
    }
    println!();

    Ok(())
}

fn print_profile(user: &User) {
    print_header(user.label());
    print_key_value("Account", &user.sam_account_name);
    print_key_value("DN", &user.dn);
    print_key_value("Enabled", if user.enabled { "yes" } else { "no" });

    let optional = [
        ("Mail", &user.mail),
        ("UPN", &user.user_principal_name),
        ("Title", &user.title),
        ("Department", &user.department),
        ("Company", &user.company),
        ("Phone", &user.telephone_number),
        ("Mobile", &user.mobile),
        ("Manager", &user.manager),
        ("Employee ID", &user.employee_id),
        ("Description", &user.description),
    ];
    for (key, value) in optional {
        if let Some(value) = value {
            print_key_value(key, value);
        }
    }

    print_key_value("Created", &format_date(user.when_created.as_deref()));
    print_key_value("Changed", &format_date(user.when_changed.as_deref()));
    if user.account_expires.is_some() {
        print_key_value("Expires", &format_date(user.account_expires.as_deref()));
    }
}

/// Format a server-reported timestamp for display
///
/// Accepts RFC 3339 and LDAP generalized time ("YYYYMMDDhhmmss.0Z");
/// anything else is shown verbatim, absence as "-".
fn format_date(value: Option<&str>) -> String {
    let Some(value) = value else {
        return "-".to_string();
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return parsed
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y%m%d%H%M%S%.fZ") {
        return parsed.format("%Y-%m-%d %H:%M:%S UTC").to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(
            format_date(Some("2024-04-12T09:30:00Z")),
            "2024-04-12 09:30:00 UTC"
        );
    }

    #[test]
    fn test_format_date_generalized_time() {
        assert_eq!(
            format_date(Some("20240412093000.0Z")),
            "2024-04-12 09:30:00 UTC"
        );
    }

    #[test]
    fn test_format_date_missing_or_opaque() {
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("never")), "never");
    }
}
