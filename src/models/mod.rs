//! Data models for owning records and their contact values.
//!
//! This module contains the aggregates returned by the repositories, the plain
//! input structs they accept, and the paging envelope used by list operations.

pub mod contact;
pub mod household;
pub mod lookup;
pub mod organization;
pub mod page;
pub mod patch;
pub mod person;

pub use contact::{Address, AddressInput, ContactSet, Email, EmailInput, NewContacts, Phone, PhoneInput};
pub use household::{Household, NewHousehold};
pub use lookup::{Country, Region};
pub use organization::{NewOrganization, Organization, OrganizationFilter, OrganizationPatch};
pub use page::{Page, PageRequest};
pub use patch::Patch;
pub use person::{NewPerson, Person, PersonFilter, PersonPatch};
