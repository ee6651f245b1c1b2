mod commands;
mod config;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use user_console::{Role, SortDir, SortKey, UserStatus};
use uuid::Uuid;

use crate::config::AppConfig;

/// User Console - filter, search and administer a user directory
#[derive(Parser)]
#[command(name = "user-console")]
#[command(about = "User Console - filter, search and administer a user directory")]
#[command(version)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// JSON file with user records (overrides `data.users_file`)
    #[arg(short, long, global = true)]
    users: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List users matching the given filters, one page at a time
    List(ListArgs),
    /// Show search suggestions for a query, optionally committing one
    Suggest(SuggestArgs),
    /// Show user statistics
    Stats(StatsArgs),
    /// Block a user
    Block { id: Uuid },
    /// Unblock a user
    Unblock { id: Uuid },
    /// Edit a user's display name, email or phone
    Edit(EditArgs),
    /// Print effective configuration (YAML) and exit
    PrintConfig,
    /// Validate configuration and the users file, then exit
    Check,
}

#[derive(Args)]
struct ListArgs {
    /// Free-text search over name, email and phone
    #[arg(short, long)]
    query: Option<String>,
    #[arg(long, value_enum)]
    role: Option<RoleArg>,
    #[arg(long, value_enum)]
    status: Option<StatusArg>,
    /// Registered on or after this date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    from: Option<String>,
    /// Registered on or before this date (whole day included)
    #[arg(long)]
    to: Option<String>,
    /// Only users who logged in within the last N days
    #[arg(long)]
    last_login_days: Option<u32>,
    #[arg(long, value_enum)]
    sort: Option<SortArg>,
    /// Sort descending
    #[arg(long, requires = "sort")]
    desc: bool,
    /// Zero-based page index
    #[arg(long, default_value_t = 0)]
    page: usize,
    #[arg(long)]
    page_size: Option<u32>,
    /// Emit the view as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SuggestArgs {
    query: String,
    /// Highlight the suggestion at this index and press Enter
    #[arg(long)]
    select: Option<usize>,
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct StatsArgs {
    /// Also show the statistics reported by the directory
    #[arg(long)]
    server: bool,
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct EditArgs {
    id: Uuid,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    /// New phone number; an empty string clears it
    #[arg(long)]
    phone: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Student,
    Tutor,
    Admin,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Student => Role::Student,
            RoleArg::Tutor => Role::Tutor,
            RoleArg::Admin => Role::Admin,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Active,
    Inactive,
    Pending,
    Suspended,
}

impl From<StatusArg> for UserStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => UserStatus::Active,
            StatusArg::Inactive => UserStatus::Inactive,
            StatusArg::Pending => UserStatus::Pending,
            StatusArg::Suspended => UserStatus::Suspended,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Name,
    Email,
    Role,
    Status,
    Registered,
    LastLogin,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortKey::DisplayName,
            SortArg::Email => SortKey::Email,
            SortArg::Role => SortKey::Role,
            SortArg::Status => SortKey::Status,
            SortArg::Registered => SortKey::RegisteredAt,
            SortArg::LastLogin => SortKey::LastLoginAt,
        }
    }
}

impl ListArgs {
    fn sort_dir(&self) -> SortDir {
        if self.desc { SortDir::Desc } else { SortDir::Asc }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (USER_CONSOLE__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.users.as_deref());

    logging::init_logging(&config.logging, cli.verbose);
    tracing::debug!(command = cli.command.name(), "User console starting");

    match cli.command {
        Commands::PrintConfig => {
            println!("{}", config.to_yaml()?);
            Ok(())
        }
        Commands::Check => commands::check(&config),
        Commands::List(args) => commands::list(&config, &args).await,
        Commands::Suggest(args) => commands::suggest(&config, &args).await,
        Commands::Stats(args) => commands::stats(&config, &args).await,
        Commands::Block { id } => commands::set_blocked(&config, id, true).await,
        Commands::Unblock { id } => commands::set_blocked(&config, id, false).await,
        Commands::Edit(args) => commands::edit(&config, args).await,
    }
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::List(_) => "list",
            Commands::Suggest(_) => "suggest",
            Commands::Stats(_) => "stats",
            Commands::Block { .. } => "block",
            Commands::Unblock { .. } => "unblock",
            Commands::Edit(_) => "edit",
            Commands::PrintConfig => "print-config",
            Commands::Check => "check",
        }
    }
}
