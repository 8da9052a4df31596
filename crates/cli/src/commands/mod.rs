//! CLI subcommands.
//!
//! # Environment Variables
//!
//! - `ADMINHUB_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)

pub mod admin;
pub mod migrate;
pub mod seed;
pub mod stats;

use std::sync::Arc;

use adminhub_server::config::{ConfigError, ServerConfig};
use adminhub_server::db::{self, PgAdminStore};
use adminhub_server::services::{AdminService, AdminServiceError};
use sqlx::PgPool;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Admin operation was rejected.
    #[error("{0}")]
    Service(#[from] AdminServiceError),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load configuration and connect to the database.
pub(crate) async fn connect() -> Result<(ServerConfig, PgPool), CommandError> {
    let config = ServerConfig::from_env()?;
    let url = config
        .database_url
        .as_ref()
        .ok_or(CommandError::MissingEnvVar("ADMINHUB_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(url).await?;
    Ok((config, pool))
}

/// Admin service backed by the `PostgreSQL` store.
pub(crate) fn service(pool: PgPool) -> AdminService {
    AdminService::new(Arc::new(PgAdminStore::new(pool)))
}
