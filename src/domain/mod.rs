//! Domain enumerations shared by the stores and repositories.
//!
//! Each enum maps one-to-one onto a Postgres enum type declared in
//! `sql/schema.sql`, and serializes to the same upper-case labels.

pub mod contact_type;
pub mod owner;

pub use contact_type::{AddressType, EmailType, PhoneType};
pub use owner::{OwnerKind, OwnerRef};
