//! Household: a group of persons sharing one primary address.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Household {
    pub household_id: i32,
    pub household_name: String,
    /// A member's address equal to this one reads back as primary
    pub primary_address_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHousehold {
    pub household_name: String,
    #[serde(default)]
    pub primary_address_id: Option<i32>,
}
