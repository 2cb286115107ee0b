//! ReWear CLI - Community clothing exchange in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{
    add, admin, browse, dashboard, demo, login, logout, logs, redeem, register, request, show,
    status, swaps, whoami,
};

/// ReWear - community clothing exchange in your terminal
#[derive(Parser)]
#[command(name = "rw", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new account
    Register {
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// Email address
        #[arg(long)]
        email: Option<String>,
    },

    /// Log in with an email address
    Login {
        /// Email address
        email: Option<String>,
    },

    /// Log out of the current session
    Logout,

    /// Show the logged-in user
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List a clothing item for exchange
    Add {
        /// Item title
        #[arg(long)]
        title: Option<String>,
        /// Item description
        #[arg(long)]
        description: Option<String>,
        /// Category (e.g. Outerwear, Tops, Dresses)
        #[arg(long)]
        category: Option<String>,
        /// Size (e.g. S, M, L)
        #[arg(long)]
        size: Option<String>,
        /// Kind of garment (e.g. jacket, shirt)
        #[arg(long)]
        kind: Option<String>,
        /// Condition (e.g. new, good, worn)
        #[arg(long)]
        condition: Option<String>,
        /// Comma-separated tags
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
        /// Points cost for redemption
        #[arg(long)]
        points: Option<i64>,
        /// Image file to attach (repeatable)
        #[arg(long)]
        image: Vec<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse available items
    Browse {
        /// Free-text search over title, description, and tags
        #[arg(long)]
        search: Option<String>,
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
        /// Filter by size
        #[arg(long)]
        size: Option<String>,
        /// Sort order (newest, oldest, points-low, points-high)
        #[arg(long, default_value = "newest")]
        sort: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single item
    Show {
        /// Item ID
        item_id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Request a direct swap for an item
    Request {
        /// Item ID
        item_id: String,
        /// Skip confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Redeem an item with points
    Redeem {
        /// Item ID
        item_id: String,
        /// Skip confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Show swaps you are part of
    Swaps {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show your profile, items, and swaps
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show community statistics
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Administrative operations
    Admin {
        #[command(subcommand)]
        command: admin::AdminCommands,
    },

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },

    /// Show recent application events
    Logs {
        /// Number of entries to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Register { name, email } => register::run(name, email),
        Commands::Login { email } => login::run(email),
        Commands::Logout => logout::run(),
        Commands::Whoami { json } => whoami::run(json),
        Commands::Add {
            title,
            description,
            category,
            size,
            kind,
            condition,
            tags,
            points,
            image,
            json,
        } => add::run(
            title,
            description,
            category,
            size,
            kind,
            condition,
            tags,
            points,
            image,
            json,
        ),
        Commands::Browse {
            search,
            category,
            size,
            sort,
            json,
        } => browse::run(search, category, size, &sort, json),
        Commands::Show { item_id, json } => show::run(&item_id, json),
        Commands::Request { item_id, yes } => request::run(&item_id, yes),
        Commands::Redeem { item_id, yes } => redeem::run(&item_id, yes),
        Commands::Swaps { json } => swaps::run(json),
        Commands::Dashboard { json } => dashboard::run(json),
        Commands::Status { json } => status::run(json),
        Commands::Admin { command } => admin::run(command),
        Commands::Demo { command } => demo::run(command),
        Commands::Logs { limit, json } => logs::run(limit, json),
    }
}
