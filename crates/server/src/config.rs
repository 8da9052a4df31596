//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required (postgres store)
//! - `ADMINHUB_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! ## Optional
//! - `ADMINHUB_STORE` - Record store backend: `postgres` (default) or `memory`
//! - `ADMINHUB_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMINHUB_PORT` - Listen port (default: 8080)
//! - `ADMINHUB_SEED_DEMO_DATA` - Insert the demo admins on startup (default: false)
//! - `ADMINHUB_DEFAULT_SENIOR_AGE` - Statistics threshold when none is given (default: 30)
//! - `ADMINHUB_LOG_FORMAT` - `text` (default) or `json`
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` / `SENTRY_TRACES_SAMPLE_RATE` - Sampling (default: 1.0)

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "8080";

/// Threshold used by the statistics endpoint when the query omits one.
pub const DEFAULT_SENIOR_AGE_THRESHOLD: i32 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but cannot be parsed (name, reason).
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Which record store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// `PostgreSQL` via sqlx.
    Postgres,
    /// Process-local store; contents are lost on restart.
    Memory,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" | "in-memory" => Ok(Self::Memory),
            other => Err(format!("unknown store '{other}' (expected postgres or memory)")),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}' (expected text or json)")),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Record store backend
    pub store: StoreKind,
    /// `PostgreSQL` connection URL (contains password); always set for `StoreKind::Postgres`
    pub database_url: Option<SecretString>,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Insert the demo admins on startup when missing
    pub seed_demo_data: bool,
    /// Statistics threshold applied when the request has none
    pub default_senior_age: i32,
    /// Log output format
    pub log_format: LogFormat,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store: StoreKind = parse_or_default(&lookup, "ADMINHUB_STORE", "postgres")?;

        let database_url = lookup("ADMINHUB_DATABASE_URL")
            .or_else(|| lookup("DATABASE_URL"))
            .map(SecretString::from);
        if store == StoreKind::Postgres && database_url.is_none() {
            return Err(ConfigError::MissingEnvVar(
                "ADMINHUB_DATABASE_URL".to_string(),
            ));
        }

        let host = parse_or_default(&lookup, "ADMINHUB_HOST", DEFAULT_HOST)?;
        let port = parse_or_default(&lookup, "ADMINHUB_PORT", DEFAULT_PORT)?;
        let seed_demo_data = parse_or_default(&lookup, "ADMINHUB_SEED_DEMO_DATA", "false")?;
        let default_senior_age = parse_or_default(
            &lookup,
            "ADMINHUB_DEFAULT_SENIOR_AGE",
            &DEFAULT_SENIOR_AGE_THRESHOLD.to_string(),
        )?;
        let log_format = parse_or_default(&lookup, "ADMINHUB_LOG_FORMAT", "text")?;

        let sentry_sample_rate = lookup("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = lookup("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            store,
            database_url,
            host,
            port,
            seed_demo_data,
            default_senior_age,
            log_format,
            sentry_dsn: lookup("SENTRY_DSN"),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Configuration for an in-memory server bound to localhost.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            store: StoreKind::Memory,
            database_url: None,
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8080,
            seed_demo_data: false,
            default_senior_age: DEFAULT_SENIOR_AGE_THRESHOLD,
            log_format: LogFormat::Text,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable, falling back to `default` when it is unset.
fn parse_or_default<T, F>(lookup: &F, key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_postgres_requires_database_url() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref k) if k == "ADMINHUB_DATABASE_URL"));
    }

    #[test]
    fn test_database_url_fallback() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/adminhub")]).unwrap();
        assert_eq!(
            config.database_url.unwrap().expose_secret(),
            "postgres://localhost/adminhub"
        );
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("ADMINHUB_STORE", "memory")]).unwrap();
        assert_eq!(config.store, StoreKind::Memory);
        assert!(config.database_url.is_none());
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert!(!config.seed_demo_data);
        assert_eq!(config.default_senior_age, DEFAULT_SENIOR_AGE_THRESHOLD);
        assert_eq!(config.log_format, LogFormat::Text);
        assert!((config.sentry_sample_rate - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("ADMINHUB_STORE", "memory"),
            ("ADMINHUB_HOST", "0.0.0.0"),
            ("ADMINHUB_PORT", "9090"),
            ("ADMINHUB_SEED_DEMO_DATA", "true"),
            ("ADMINHUB_DEFAULT_SENIOR_AGE", "45"),
            ("ADMINHUB_LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:9090");
        assert!(config.seed_demo_data);
        assert_eq!(config.default_senior_age, 45);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("ADMINHUB_STORE", "memory"), ("ADMINHUB_PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref k, _) if k == "ADMINHUB_PORT"));
    }

    #[test]
    fn test_unknown_store() {
        let err = load(&[("ADMINHUB_STORE", "redis")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref k, _) if k == "ADMINHUB_STORE"));
    }
}
