//! Adminhub server library.
//!
//! This crate provides the admin HTTP service as a library, allowing the
//! router to be driven in-process by tests and reused by the CLI.
//!
//! # Layers
//!
//! `routes` (HTTP) → `services` (validation, not-found/conflict) → `db`
//! (record store) → `adminhub_core` (entities and statistics).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use std::sync::Arc;

use config::{ServerConfig, StoreKind};
use db::{AdminStore, InMemoryAdminStore, PgAdminStore};

/// Open the record store selected by the configuration.
///
/// # Errors
///
/// Returns `sqlx::Error` if the `PostgreSQL` pool cannot be created.
pub async fn open_store(config: &ServerConfig) -> Result<Arc<dyn AdminStore>, sqlx::Error> {
    match (config.store, config.database_url.as_ref()) {
        (StoreKind::Postgres, Some(url)) => {
            let pool = db::create_pool(url).await?;
            tracing::info!("Database pool created");
            Ok(Arc::new(PgAdminStore::new(pool)))
        }
        (StoreKind::Postgres, None) => Err(sqlx::Error::Configuration(
            "ADMINHUB_DATABASE_URL is required for the postgres store".into(),
        )),
        (StoreKind::Memory, _) => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            Ok(Arc::new(InMemoryAdminStore::new()))
        }
    }
}
