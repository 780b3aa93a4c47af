//! Configuration management for the contact store.
//!
//! This module handles loading and validating configuration from environment variables,
//! reading a `.env` file first when one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact store.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full connection URL; when set it overrides the discrete settings below
    pub database_url: Option<String>,

    /// Database server host (default: "localhost")
    pub db_host: String,

    /// Database server port (default: 5432)
    pub db_port: u16,

    /// Database name (default: "contact")
    pub db_name: String,

    /// Database user (default: "postgres")
    pub db_user: String,

    /// Database password (no default)
    pub db_password: Option<String>,

    /// Maximum pooled connections (default: 20)
    pub max_connections: u32,

    /// Require TLS for the connection (default: false)
    pub ssl: bool,

    /// Seconds to wait for a pooled connection (default: 2)
    pub connect_timeout_secs: u64,

    /// Seconds before an idle connection is closed (default: 30)
    pub idle_timeout_secs: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `DATABASE_URL`: Full Postgres URL, overrides the `DB_*` settings
    /// - `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER`, `DB_PASSWORD`
    /// - `DB_MAX_CONNECTIONS`: Pool size (default: 20)
    /// - `DB_SSL`: "true" to require TLS (default: false)
    /// - `DB_CONNECT_TIMEOUT_SECS`: Acquire timeout (default: 2)
    /// - `DB_IDLE_TIMEOUT_SECS`: Idle timeout (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Config::default();

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        if let Some(url) = &database_url {
            if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
                return Err(ConfigError::InvalidValue {
                    var: "DATABASE_URL".to_string(),
                    reason: "Must start with postgres:// or postgresql://".to_string(),
                });
            }
        }

        let db_port = Self::parse_env("DB_PORT", defaults.db_port)?;
        let max_connections = Self::parse_env("DB_MAX_CONNECTIONS", defaults.max_connections)?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                var: "DB_MAX_CONNECTIONS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        Ok(Config {
            database_url,
            db_host: env::var("DB_HOST").unwrap_or(defaults.db_host),
            db_port,
            db_name: env::var("DB_NAME").unwrap_or(defaults.db_name),
            db_user: env::var("DB_USER").unwrap_or(defaults.db_user),
            db_password: env::var("DB_PASSWORD").ok(),
            max_connections,
            ssl: env::var("DB_SSL").map(|v| v == "true").unwrap_or(false),
            connect_timeout_secs: Self::parse_env(
                "DB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            idle_timeout_secs: Self::parse_env("DB_IDLE_TIMEOUT_SECS", defaults.idle_timeout_secs)?,
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    /// Parse an environment variable as a number with a default value.
    fn parse_env<T: std::str::FromStr>(var_name: &str, default: T) -> ConfigResult<T> {
        match env::var(var_name) {
            Ok(val) => val.parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: None,
            db_host: "localhost".to_string(),
            db_port: 5432,
            db_name: "contact".to_string(),
            db_user: "postgres".to_string(),
            db_password: None,
            max_connections: 20,
            ssl: false,
            connect_timeout_secs: 2,
            idle_timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.db_host, "localhost");
        assert_eq!(config.db_port, 5432);
        assert_eq!(config.db_name, "contact");
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.connect_timeout_secs, 2);
        assert_eq!(config.idle_timeout_secs, 30);
        assert!(!config.ssl);
        assert!(config.database_url.is_none());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("DB_HOST", "db.internal");
        guard.set("DB_PORT", "6543");
        guard.set("DB_MAX_CONNECTIONS", "5");
        guard.set("DB_SSL", "true");

        let config = Config::from_env().unwrap();
        assert_eq!(config.db_host, "db.internal");
        assert_eq!(config.db_port, 6543);
        assert_eq!(config.max_connections, 5);
        assert!(config.ssl);
    }

    #[test]
    #[serial]
    fn test_config_invalid_port() {
        let mut guard = EnvGuard::new();
        guard.set("DB_PORT", "not-a-port");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "DB_PORT"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_zero_pool_size_rejected() {
        let mut guard = EnvGuard::new();
        guard.set("DB_MAX_CONNECTIONS", "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "DB_MAX_CONNECTIONS"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_database_url_scheme() {
        let mut guard = EnvGuard::new();
        guard.set("DATABASE_URL", "mysql://localhost/contact");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "DATABASE_URL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64", "42");

        assert_eq!(Config::parse_env::<u64>("TEST_U64", 10).unwrap(), 42);
        assert_eq!(Config::parse_env::<u64>("NONEXISTENT", 10).unwrap(), 10);

        guard.set("TEST_U64_INVALID", "not-a-number");
        assert!(Config::parse_env::<u64>("TEST_U64_INVALID", 10).is_err());
    }
}
