//! Shared contact values and the links that tie them to owners.
//!
//! Value rows (email, phone, address) are not owned by any single record. The
//! [`values`] module resolves an input to a value identity, reusing an existing
//! row when the natural key already exists; [`associations`] links that
//! identity to an owner and reads the links back. Both take the caller's
//! connection so they run inside the caller's transaction.

pub mod associations;
pub mod values;

pub use associations::{attach_contacts, link, load_contacts, LinkAttributes};
pub use values::{resolve, NewValue};

/// The kind of a contact value, with the tables that hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Email,
    Phone,
    Address,
}

impl ValueKind {
    pub const ALL: [ValueKind; 3] = [ValueKind::Email, ValueKind::Phone, ValueKind::Address];

    /// Table holding the value rows.
    pub fn value_table(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
        }
    }

    /// Identity column of the value table, also the FK column on the link table.
    pub fn id_column(&self) -> &'static str {
        match self {
            Self::Email => "email_id",
            Self::Phone => "phone_id",
            Self::Address => "address_id",
        }
    }

    /// Table linking owners to values of this kind.
    pub fn link_table(&self) -> &'static str {
        match self {
            Self::Email => "contact_email",
            Self::Phone => "contact_phone",
            Self::Address => "contact_address",
        }
    }

    /// Unique constraint on `(contact_id, contact_entity_type, <id>)`.
    pub fn link_constraint(&self) -> &'static str {
        match self {
            Self::Email => "uq_contact_email",
            Self::Phone => "uq_contact_phone",
            Self::Address => "uq_contact_address",
        }
    }

    /// Per-link attribute column.
    pub fn attribute_column(&self) -> &'static str {
        match self {
            Self::Email | Self::Phone => "is_primary",
            Self::Address => "address_type",
        }
    }
}
