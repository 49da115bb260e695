//! Membership command - reconcile an identity's group memberships

use crate::api::ApiClient;
use crate::commands::require_auth;
use crate::error::{CliError, CliResult};
use crate::models::{Group, User};
use crate::output::{notify, print_info, print_key_value, print_warning, truncate, Notice};
use crate::reconcile::{MembershipEditor, PendingAction, SaveStatus};
use crate::search::GroupSearcher;
use clap::Args;
use dialoguer::{Confirm, Input, MultiSelect};

/// Arguments for the membership command
#[derive(Args)]
pub struct MembershipArgs {
    /// Account name of the identity to edit
    pub account_name: String,

    /// Group (by common name) to add the identity to; repeatable
    #[arg(long = "add", value_name = "GROUP")]
    pub add: Vec<String>,

    /// Group (by common name) to remove the identity from; repeatable
    #[arg(long = "remove", value_name = "GROUP")]
    pub remove: Vec<String>,

    /// Show the computed changes without applying them
    #[arg(long)]
    pub dry_run: bool,
}

/// Execute the membership command
pub async fn execute(args: MembershipArgs) -> CliResult<()> {
    let auth = require_auth().await?;
    let api = auth.api();

    let (user, catalog) = load_view(api, &args.account_name).await?;
    let mut editor = MembershipEditor::new(&user, &catalog);

    let interactive = args.add.is_empty() && args.remove.is_empty();
    if interactive {
        edit_interactively(api, &mut editor).await?;
    } else {
        apply_flags(api, &mut editor, &catalog, &args).await?;
    }

    if editor.pending().is_empty() {
        notify(Notice::Info, "No changes to save");
        return Ok(());
    }

    print_pending(&editor);
    if args.dry_run {
        print_info("Dry run; nothing applied.");
        return Ok(());
    }

    if interactive {
        let confirmed = Confirm::new()
            .with_prompt(format!("Apply {} change(s)?", editor.pending().len()))
            .default(true)
            .interact()?;
        if !confirmed {
            print_info("Changes discarded.");
            return Ok(());
        }
    }

    let outcome = editor.save(api).await;
    notify(outcome.notice(), &outcome.summary());

    if outcome.status() != SaveStatus::NoChanges {
        // Re-fetch so the displayed table is server truth, not local optimism
        let (user, catalog) = load_view(api, &args.account_name).await?;
        let refreshed = MembershipEditor::new(&user, &catalog);
        println!();
        print_rows(&refreshed);
    }

    Ok(())
}

/// Fetch the identity snapshot and group catalog for one edit session
async fn load_view(api: &ApiClient, account_name: &str) -> CliResult<(User, Vec<Group>)> {
    let response = api.get_user(account_name).await?;
    let user = match (response.success, response.user) {
        (true, Some(user)) => user,
        _ => {
            return Err(CliError::NotFound(
                response
                    .error
                    .unwrap_or_else(|| format!("User not found: {account_name}")),
            ))
        }
    };

    let catalog = match api.all_groups(api.config().base_dn.as_deref()).await {
        Ok(response) if response.success => response.groups.unwrap_or_default(),
        _ => Vec::new(),
    };

    Ok((user, catalog))
}

async fn apply_flags(
    api: &ApiClient,
    editor: &mut MembershipEditor,
    catalog: &[Group],
    args: &MembershipArgs,
) -> CliResult<()> {
    for name in &args.add {
        let existing = editor
            .rows()
            .iter()
            .find(|r| r.group.cn.eq_ignore_ascii_case(name))
            .map(|r| (r.group.cn.clone(), r.is_member));

        match existing {
            Some((_, true)) => print_info(&format!("Already a member of {name}")),
            Some((cn, false)) => {
                editor.toggle(&cn);
            }
            None => {
                let group = resolve_group(api, catalog, name).await?;
                editor.add_group(group);
            }
        }
    }

    for name in &args.remove {
        let existing = editor
            .rows()
            .iter()
            .find(|r| r.group.cn.eq_ignore_ascii_case(name))
            .map(|r| (r.group.cn.clone(), r.is_member));

        match existing {
            Some((cn, true)) => {
                editor.toggle(&cn);
            }
            _ => print_warning(&format!("Not a member of {name}; skipping")),
        }
    }

    Ok(())
}

/// Resolve a group name against the catalog, then the search endpoint
async fn resolve_group(api: &ApiClient, catalog: &[Group], name: &str) -> CliResult<Group> {
    if let Some(group) = catalog.iter().find(|g| {
        g.cn.eq_ignore_ascii_case(name) || g.sam_account_name.eq_ignore_ascii_case(name)
    }) {
        return Ok(group.clone());
    }

    let response = api.search_groups(name).await?;
    if response.success {
        if let Some(group) = response
            .groups
            .unwrap_or_default()
            .into_iter()
            .find(|g| g.cn.eq_ignore_ascii_case(name))
        {
            return Ok(group);
        }
    }

    Err(CliError::NotFound(format!("Group not found: {name}")))
}

async fn edit_interactively(api: &ApiClient, editor: &mut MembershipEditor) -> CliResult<()> {
    print_rows(editor);

    // Add phase: debounce-backed search, filtered to groups without a row
    let searcher = GroupSearcher::default();
    loop {
        let query: String = Input::new()
            .with_prompt("Search groups to add (leave empty to continue)")
            .allow_empty(true)
            .interact_text()?;
        if query.is_empty() {
            break;
        }

        let Some(results) = searcher.search(api, &query).await? else {
            continue;
        };
        let candidates = editor.candidates(results);
        if candidates.is_empty() {
            print_info("No matching groups (already-listed groups are hidden).");
            continue;
        }

        let items: Vec<String> = candidates
            .iter()
            .map(|g| {
                format!(
                    "{} — {}",
                    g.cn,
                    g.description.as_deref().unwrap_or("No description")
                )
            })
            .collect();
        let picked = MultiSelect::new()
            .with_prompt("Groups to add")
            .items(&items)
            .interact()?;
        for index in picked {
            editor.add_group(candidates[index].clone());
        }
    }

    // Toggle phase: checkbox analog over the whole row table
    if !editor.rows().is_empty() {
        let items: Vec<String> = editor
            .rows()
            .iter()
            .map(|r| {
                format!(
                    "{} — {}",
                    r.group.cn,
                    r.group.description.as_deref().unwrap_or("-")
                )
            })
            .collect();
        let defaults: Vec<bool> = editor.rows().iter().map(|r| r.is_member).collect();

        let selected = MultiSelect::new()
            .with_prompt("Memberships (space toggles, enter confirms)")
            .items(&items)
            .defaults(&defaults)
            .interact()?;

        let cns: Vec<String> = editor.rows().iter().map(|r| r.group.cn.clone()).collect();
        for (index, cn) in cns.iter().enumerate() {
            let wanted = selected.contains(&index);
            let current = editor
                .rows()
                .iter()
                .find(|r| &r.group.cn == cn)
                .map(|r| r.is_member)
                .unwrap_or(false);
            if wanted != current {
                editor.toggle(cn);
            }
        }
    }

    Ok(())
}

fn print_pending(editor: &MembershipEditor) {
    println!();
    print_key_value(
        "Pending",
        &format!("{} change(s)", editor.pending().len()),
    );
    for (cn, action) in editor.pending().iter() {
        match action {
            PendingAction::Add => println!("    + {cn}"),
            PendingAction::Remove => println!("    - {cn}"),
        }
    }
    println!();
}

fn print_rows(editor: &MembershipEditor) {
    if editor.rows().is_empty() {
        println!("  No group memberships found");
        return;
    }

    println!("  {:<3} {:<30} {:<40} {:<8}", "", "Name", "Description", "Type");
    for row in editor.rows() {
        let mark = if row.is_member { "[x]" } else { "[ ]" };
        let pending = if editor.pending().contains(&row.group.cn) {
            " *"
        } else {
            ""
        };
        println!(
            "  {:<3} {:<30} {:<40} {:<8}{}",
            mark,
            truncate(&row.group.cn, 30),
            truncate(row.group.description.as_deref().unwrap_or("-"), 40),
            row.membership_type,
            pending
        );
    }
}
