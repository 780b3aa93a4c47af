//! Categories attached to contact values and their links.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "email_type_enum", rename_all = "UPPERCASE")]
pub enum EmailType {
    Work,
    Personal,
    Billing,
    Other,
}

/// Category of a phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "phone_type_enum", rename_all = "UPPERCASE")]
pub enum PhoneType {
    Mobile,
    Office,
    Home,
    Fax,
    Other,
}

/// Role an address plays for one particular owner.
///
/// Stored on the link row, not on the address itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "address_type_enum", rename_all = "UPPERCASE")]
pub enum AddressType {
    Shipping,
    Billing,
    Home,
    Office,
    Other,
}

impl EmailType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "WORK",
            Self::Personal => "PERSONAL",
            Self::Billing => "BILLING",
            Self::Other => "OTHER",
        }
    }
}

impl PhoneType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "MOBILE",
            Self::Office => "OFFICE",
            Self::Home => "HOME",
            Self::Fax => "FAX",
            Self::Other => "OTHER",
        }
    }
}

impl AddressType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shipping => "SHIPPING",
            Self::Billing => "BILLING",
            Self::Home => "HOME",
            Self::Office => "OFFICE",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for EmailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
