//! Database handle and connection scope.
//!
//! A `Database` is created once from [`Config`] and handed to each repository.
//! Every repository operation acquires exactly one pooled connection for its
//! whole duration; the connection goes back to the pool when it is dropped,
//! whichever way the operation exits.

use crate::config::Config;
use crate::error::ContactResult;
use chrono::{DateTime, Utc};
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{PgPool, Postgres};
use std::str::FromStr;
use std::time::Duration;

/// Schema applied by [`Database::apply_schema`].
pub const SCHEMA_SQL: &str = include_str!("../sql/schema.sql");

/// Shared handle over a Postgres connection pool.
///
/// Cloning is cheap; clones share the same pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Open a pool using the connection settings in `config`.
    pub async fn connect(config: &Config) -> ContactResult<Self> {
        let options = Self::connect_options(config)?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .connect_with(options)
            .await?;

        tracing::info!(
            host = %config.db_host,
            database = %config.db_name,
            max_connections = config.max_connections,
            "Database pool opened"
        );

        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    fn connect_options(config: &Config) -> ContactResult<PgConnectOptions> {
        let options = match &config.database_url {
            Some(url) => PgConnectOptions::from_str(url)?,
            None => {
                let mut options = PgConnectOptions::new()
                    .host(&config.db_host)
                    .port(config.db_port)
                    .database(&config.db_name)
                    .username(&config.db_user);
                if let Some(password) = &config.db_password {
                    options = options.password(password);
                }
                options
            }
        };

        let ssl_mode = if config.ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };

        Ok(options.ssl_mode(ssl_mode))
    }

    /// Check out one connection from the pool.
    pub async fn acquire(&self) -> ContactResult<PoolConnection<Postgres>> {
        Ok(self.pool.acquire().await?)
    }

    /// Current server time; doubles as a connectivity check.
    pub async fn ping(&self) -> ContactResult<DateTime<Utc>> {
        let now = sqlx::query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
            .fetch_one(&self.pool)
            .await?;
        Ok(now)
    }

    /// Create the tables, enum types and seed rows if they do not exist.
    pub async fn apply_schema(&self) -> ContactResult<()> {
        sqlx::raw_sql(SCHEMA_SQL).execute(&self.pool).await?;
        tracing::info!("Schema applied");
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
