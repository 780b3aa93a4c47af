//! Contact Store - Main entry point
//!
//! Connects to the configured database, optionally applies the schema, and
//! prints a JSON health report to stdout.

use anyhow::Result;
use contact_store::{Config, Database, HealthReport};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Logs go to stderr; stdout carries the report only
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let db = match Database::connect(&config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    if std::env::var("APPLY_SCHEMA").map(|v| v == "true").unwrap_or(false) {
        db.apply_schema().await?;
    }

    let report = HealthReport::collect(&db).await?;
    info!(
        persons = report.persons,
        organizations = report.organizations,
        "Database reachable"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    db.close().await;
    Ok(())
}
