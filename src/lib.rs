//! Contact Store - persons and organizations sharing deduplicated contact values.
//!
//! Emails, phones and addresses live in their own tables and are linked to
//! their owners through association rows tagged with the owner kind, so one
//! value row can serve any number of persons and organizations.
//!
//! # Architecture
//!
//! - **domain**: Owner discriminant and contact type enumerations
//! - **models**: Aggregates, inputs, patches and the paging envelope
//! - **store**: Value resolution (get-or-create) and owner-to-value links
//! - **query**: Filtered, paginated search statements and partial updates
//! - **repositories**: Transactional aggregate operations per owner kind
//! - **db**: Connection pool handle and schema bootstrap
//! - **error**: Error taxonomy with SQLSTATE classification
//! - **config**: Configuration from environment variables

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod health;
pub mod models;
pub mod query;
pub mod repositories;
pub mod store;

pub use config::Config;
pub use db::Database;
pub use domain::{AddressType, EmailType, OwnerKind, OwnerRef, PhoneType};
pub use error::{ConfigError, ContactError, ContactResult};
pub use health::HealthReport;
pub use models::{
    Address, AddressInput, ContactSet, Email, EmailInput, Household, NewContacts, NewHousehold,
    NewOrganization, NewPerson, Organization, OrganizationFilter, OrganizationPatch, Page,
    PageRequest, Patch, Person, PersonFilter, PersonPatch, Phone, PhoneInput,
};
pub use repositories::{
    HouseholdRepository, LookupRepository, OrganizationRepository, PersonRepository,
    PgHouseholdRepository, PgLookupRepository, PgOrganizationRepository, PgPersonRepository,
};
