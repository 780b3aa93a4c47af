//! Organization aggregate and its inputs.

use super::contact::{ContactSet, NewContacts};
use super::patch::Patch;
use serde::{Deserialize, Serialize};

/// An organization with every linked contact value.
///
/// `parent_organization_id` forms a tree; cycles are not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Organization {
    pub organization_id: i32,
    pub name: String,
    pub website: Option<String>,
    pub parent_organization_id: Option<i32>,

    #[sqlx(skip)]
    #[serde(flatten)]
    pub contacts: ContactSet,
}

/// Fields for a new organization plus the contact values to link at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrganization {
    /// Unique across organizations
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub parent_organization_id: Option<i32>,

    #[serde(flatten)]
    pub contacts: NewContacts,
}

impl NewOrganization {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn with_parent(mut self, parent_organization_id: i32) -> Self {
        self.parent_organization_id = Some(parent_organization_id);
        self
    }
}

/// Partial update of an organization's scalar fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OrganizationPatch {
    pub name: Option<String>,
    pub website: Patch<String>,
    pub parent_organization_id: Patch<i32>,
}

/// Search filters for organizations. Absent filters are not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationFilter {
    pub name: Option<String>,
    pub website: Option<String>,
}
