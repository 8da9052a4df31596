//! Record stores for admins.
//!
//! # Stores
//!
//! - [`PgAdminStore`] - `PostgreSQL` via sqlx (table `admins`)
//! - [`InMemoryAdminStore`] - process-local, for tests and throwaway instances
//!
//! Both implement [`AdminStore`], which is the only thing services see.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p adminhub-cli -- migrate
//! ```

pub mod admins;
pub mod memory;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use adminhub_core::{AdminId, AdminRecord, Email, NewAdmin};

pub use admins::PgAdminStore;
pub use memory::InMemoryAdminStore;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Source of admin records.
///
/// `fetch_all` returns a snapshot ordered by ascending ID; the snapshot is not
/// affected by writes made after the call returns.
#[async_trait]
pub trait AdminStore: Send + Sync {
    /// Every admin currently stored.
    async fn fetch_all(&self) -> Result<Vec<AdminRecord>, RepositoryError>;

    /// The admin with the given ID, if any.
    async fn find_by_id(&self, id: AdminId) -> Result<Option<AdminRecord>, RepositoryError>;

    /// Whether an admin with the given ID exists.
    async fn exists_by_id(&self, id: AdminId) -> Result<bool, RepositoryError>;

    /// Whether any admin already uses this email.
    async fn exists_by_email(&self, email: &Email) -> Result<bool, RepositoryError>;

    /// Insert a new admin and return it with its assigned ID.
    ///
    /// Returns `RepositoryError::Conflict` if the email is already taken.
    async fn insert(&self, admin: &NewAdmin) -> Result<AdminRecord, RepositoryError>;

    /// Overwrite every field of an existing admin.
    ///
    /// Returns `Ok(None)` when no admin has this ID, and
    /// `RepositoryError::Conflict` if the new email belongs to another admin.
    async fn update(
        &self,
        id: AdminId,
        admin: &NewAdmin,
    ) -> Result<Option<AdminRecord>, RepositoryError>;

    /// Delete an admin, returning whether a row was removed.
    async fn delete(&self, id: AdminId) -> Result<bool, RepositoryError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Apply pending migrations from `crates/server/migrations/`.
///
/// # Errors
///
/// Returns `sqlx::migrate::MigrateError` if a migration fails to apply.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
