//! Adminhub CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! adminhub migrate
//!
//! # Insert the demo admins (skipped when already present)
//! adminhub seed
//!
//! # Create an admin
//! adminhub admin create -e admin@example.com -n "Admin Name" -a 42
//!
//! # Print statistics as JSON
//! adminhub stats --senior-age-threshold 40
//! ```
//!
//! All commands read `ADMINHUB_DATABASE_URL` (or `DATABASE_URL`) from the
//! environment or a `.env` file.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "adminhub")]
#[command(author, version, about = "Adminhub CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Insert the demo admins
    Seed,
    /// Manage admins
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Print admin statistics as JSON
    Stats {
        /// Minimum age (inclusive) for an active admin to count as senior
        #[arg(long)]
        senior_age_threshold: Option<i32>,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin display name
        #[arg(short, long)]
        name: String,

        /// Admin age in years
        #[arg(short, long)]
        age: i32,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::demo_admins().await?,
        Commands::Admin { action } => match action {
            AdminAction::Create { email, name, age } => {
                commands::admin::create(&email, &name, age).await?;
            }
        },
        Commands::Stats {
            senior_age_threshold,
        } => commands::stats::print(senior_age_threshold).await?,
    }
    Ok(())
}
