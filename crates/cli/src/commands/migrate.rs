//! Database migration command.
//!
//! Applies `crates/server/migrations/` to the configured database.

use adminhub_server::db;

use super::{CommandError, connect};

/// Run all pending migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let (_, pool) = connect().await?;

    tracing::info!("Running migrations...");
    db::run_migrations(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
