//! Reference data for address entry.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Country {
    pub iso_code_2: String,
    pub country_name: String,
}

/// A subdivision of a country (state, province, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Region {
    pub country_iso_code: String,
    pub region_code: String,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub region_type: Option<String>,
}
