//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::db::AdminStore;
use crate::services::AdminService;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The record store is injected
/// by the caller, so tests can hand in an in-memory store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    admins: AdminService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration
    /// * `store` - Record store backing the admin service
    #[must_use]
    pub fn new(config: ServerConfig, store: Arc<dyn AdminStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                admins: AdminService::new(store),
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the admin service.
    #[must_use]
    pub fn admins(&self) -> &AdminService {
        &self.inner.admins
    }
}
