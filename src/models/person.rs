//! Person aggregate and its inputs.

use super::contact::{ContactSet, NewContacts};
use super::patch::Patch;
use serde::{Deserialize, Serialize};

/// A person with every linked contact value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Person {
    pub person_id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub birth_year: Option<i16>,
    pub birth_month: Option<i16>,
    pub birth_day: Option<i16>,
    pub preferred_language: Option<String>,
    pub household_id: Option<i32>,

    /// Emails, phones and addresses, always present (possibly empty)
    #[sqlx(skip)]
    #[serde(flatten)]
    pub contacts: ContactSet,
}

/// Fields for a new person plus the contact values to link at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    #[serde(default)]
    pub birth_year: Option<i16>,
    #[serde(default)]
    pub birth_month: Option<i16>,
    #[serde(default)]
    pub birth_day: Option<i16>,
    #[serde(default)]
    pub preferred_language: Option<String>,
    #[serde(default)]
    pub household_id: Option<i32>,

    #[serde(flatten)]
    pub contacts: NewContacts,
}

impl NewPerson {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }
}

/// Partial update of a person's scalar fields.
///
/// Required columns use `Option` (absent means unchanged); nullable columns use
/// `Patch` so that clearing a value is distinct from leaving it alone. Nested
/// contacts are not updatable here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PersonPatch {
    pub first_name: Option<String>,
    pub middle_name: Patch<String>,
    pub last_name: Option<String>,
    pub birth_year: Patch<i16>,
    pub birth_month: Patch<i16>,
    pub birth_day: Patch<i16>,
    pub preferred_language: Patch<String>,
    pub household_id: Patch<i32>,
}

/// Search filters for persons. Absent filters are not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Partial match on any linked email address
    pub email: Option<String>,
    /// Partial match on any linked phone's local number
    pub phone: Option<String>,
    /// Exact match
    pub household_id: Option<i32>,
}
