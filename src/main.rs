//! diradm - directory-service administration CLI
//!
//! This CLI enables operators to:
//! - Authenticate against the directory-service API
//! - Look up identities and their profiles
//! - Search identities and groups
//! - Reconcile an identity's group memberships in one batched save

use clap::{Parser, Subcommand};
use diradm::commands;
use diradm::error::CliResult;
use diradm::logging::{self, LogLevel};

/// diradm - directory service administration
#[derive(Parser)]
#[command(name = "diradm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable progress logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Enable HTTP debug logging (session tokens redacted)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Authenticate with the directory service
    Login(commands::login::LoginArgs),

    /// End the session and clear the stored token
    Logout(commands::logout::LogoutArgs),

    /// Display the authenticated identity
    Whoami(commands::whoami::WhoamiArgs),

    /// Display an identity's profile and memberships
    User(commands::user::UserArgs),

    /// Search identities by name or mail
    Search(commands::search::SearchArgs),

    /// List or search the group catalog
    Groups(commands::groups::GroupsArgs),

    /// Reconcile an identity's group memberships
    Membership(commands::membership::MembershipArgs),

    /// Show service health and session state
    Status(commands::status::StatusArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(LogLevel::from_args_and_env(cli.verbose, cli.debug));

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Login(args) => commands::login::execute(args).await,
        Commands::Logout(args) => commands::logout::execute(args).await,
        Commands::Whoami(args) => commands::whoami::execute(args).await,
        Commands::User(args) => commands::user::execute(args).await,
        Commands::Search(args) => commands::search::execute(args).await,
        Commands::Groups(args) => commands::groups::execute(args).await,
        Commands::Membership(args) => commands::membership::execute(args).await,
        Commands::Status(args) => commands::status::execute(args).await,
    }
}
