//! Integration test utilities and shared configuration.
//!
//! These tests run against a real PostgreSQL database named by
//! `TEST_DATABASE_URL` (read from the environment or a `.env` file). When it
//! is not set, every test prints a notice and returns without asserting.

use contact_store::Database;
use sqlx::postgres::PgPoolOptions;
use std::env;

pub mod fixtures;

const RESET_TABLES: &str = "TRUNCATE contact_email, contact_phone, contact_address, \
     email, phone, person, household, organization, address \
     RESTART IDENTITY CASCADE";

/// Connect to the test database, apply the schema and empty every owner and
/// contact table. Returns `None` when no test database is configured.
pub async fn setup_test_db() -> Option<Database> {
    dotenvy::dotenv().ok();

    let url = match env::var("TEST_DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => {
            eprintln!("  ⚠ TEST_DATABASE_URL not set, skipping database test");
            return None;
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("Failed to connect to TEST_DATABASE_URL");
    let db = Database::from_pool(pool);

    db.apply_schema().await.expect("Failed to apply schema");
    sqlx::raw_sql(RESET_TABLES)
        .execute(db.pool())
        .await
        .expect("Failed to reset tables");

    Some(db)
}

/// Number of rows in `table`.
#[allow(dead_code)]
pub async fn count_rows(db: &Database, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(db.pool())
        .await
        .expect("Failed to count rows")
}
