//! Contact values (email, phone, address) as seen through one owner's links.

use crate::domain::{AddressType, EmailType, PhoneType};
use serde::{Deserialize, Serialize};

/// An email address linked to an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Email {
    pub email_id: i32,
    pub email_address: String,
    pub email_type: EmailType,
    /// Taken from the link row, not the email itself
    pub is_primary: bool,
}

/// A phone number linked to an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Phone {
    pub phone_id: i32,
    pub country_code: Option<String>,
    pub area_code: Option<String>,
    pub local_number: String,
    pub phone_type: PhoneType,
    pub extension: Option<String>,
    /// Taken from the link row, not the phone itself
    pub is_primary: bool,
}

/// A postal address linked to an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Address {
    pub address_id: i32,
    pub address_line_1: String,
    pub address_line_2: Option<String>,
    pub address_line_3: Option<String>,
    pub city_locality: String,
    pub region_code: Option<String>,
    pub postal_code: Option<String>,
    pub country_iso_code: String,
    /// Role of this address for the owner it was read through
    pub address_type: AddressType,
    /// For persons: whether this is the household's primary address.
    /// Always false for organizations.
    pub is_primary: bool,
}

/// All contact values linked to one owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSet {
    pub emails: Vec<Email>,
    pub phones: Vec<Phone>,
    pub addresses: Vec<Address>,
}

/// Email supplied when creating an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailInput {
    pub email_address: String,
    pub email_type: EmailType,
    #[serde(default)]
    pub is_primary: bool,
}

/// Phone supplied when creating an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneInput {
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub area_code: Option<String>,
    pub local_number: String,
    pub phone_type: PhoneType,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

/// Address supplied when creating an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInput {
    pub address_line_1: String,
    #[serde(default)]
    pub address_line_2: Option<String>,
    #[serde(default)]
    pub address_line_3: Option<String>,
    pub city_locality: String,
    #[serde(default)]
    pub region_code: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    pub country_iso_code: String,
    /// Falls back to the owner kind's default role when absent
    #[serde(default)]
    pub address_type: Option<AddressType>,
}

/// Nested contact arrays accepted alongside owner fields on create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewContacts {
    pub emails: Vec<EmailInput>,
    pub phones: Vec<PhoneInput>,
    pub addresses: Vec<AddressInput>,
}

impl NewContacts {
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.phones.is_empty() && self.addresses.is_empty()
    }
}

impl EmailInput {
    pub fn new(email_address: impl Into<String>, email_type: EmailType) -> Self {
        Self {
            email_address: email_address.into(),
            email_type,
            is_primary: false,
        }
    }

    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }
}

impl PhoneInput {
    pub fn new(local_number: impl Into<String>, phone_type: PhoneType) -> Self {
        Self {
            country_code: None,
            area_code: None,
            local_number: local_number.into(),
            phone_type,
            extension: None,
            is_primary: false,
        }
    }

    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }
}

impl AddressInput {
    pub fn new(
        address_line_1: impl Into<String>,
        city_locality: impl Into<String>,
        country_iso_code: impl Into<String>,
    ) -> Self {
        Self {
            address_line_1: address_line_1.into(),
            address_line_2: None,
            address_line_3: None,
            city_locality: city_locality.into(),
            region_code: None,
            postal_code: None,
            country_iso_code: country_iso_code.into(),
            address_type: None,
        }
    }

    pub fn with_type(mut self, address_type: AddressType) -> Self {
        self.address_type = Some(address_type);
        self
    }
}
