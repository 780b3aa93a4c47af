//! Connectivity and row-count snapshot of the store.

use crate::db::Database;
use crate::error::ContactResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

const COUNT_OWNERS: &str = "SELECT \
     (SELECT COUNT(*) FROM person) AS persons, \
     (SELECT COUNT(*) FROM organization) AS organizations";

/// Health report printed by the `contact-store` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub database_time: DateTime<Utc>,
    pub persons: i64,
    pub organizations: i64,
    pub timestamp: DateTime<Utc>,
}

impl HealthReport {
    /// Ping the database and count the owning records.
    pub async fn collect(db: &Database) -> ContactResult<Self> {
        let database_time = db.ping().await?;
        let (persons, organizations) = sqlx::query_as::<_, (i64, i64)>(COUNT_OWNERS)
            .fetch_one(db.pool())
            .await?;

        Ok(Self {
            status: "ok",
            database_time,
            persons,
            organizations,
            timestamp: Utc::now(),
        })
    }
}
