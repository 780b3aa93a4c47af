//! Owner discriminant stored on association rows.

use super::contact_type::AddressType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of record owns an association row.
///
/// The same value and link tables serve every owner kind; this tag is what
/// tells their rows apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "contact_entity_type_enum", rename_all = "UPPERCASE")]
pub enum OwnerKind {
    Person,
    Organization,
}

impl OwnerKind {
    /// Label as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Organization => "ORGANIZATION",
        }
    }

    /// Human readable entity name used in error messages.
    pub fn entity_name(&self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::Organization => "Organization",
        }
    }

    /// Role given to an address linked without an explicit `address_type`.
    pub fn default_address_type(&self) -> AddressType {
        match self {
            Self::Person => AddressType::Home,
            Self::Organization => AddressType::Office,
        }
    }
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A specific owning record: its identity plus its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerRef {
    pub id: i32,
    pub kind: OwnerKind,
}

impl OwnerRef {
    pub fn person(id: i32) -> Self {
        Self {
            id,
            kind: OwnerKind::Person,
        }
    }

    pub fn organization(id: i32) -> Self {
        Self {
            id,
            kind: OwnerKind::Organization,
        }
    }
}
