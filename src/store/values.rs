//! Get-or-create for contact value rows.

use super::ValueKind;
use crate::error::ContactResult;
use crate::models::{AddressInput, EmailInput, PhoneInput};
use sqlx::PgConnection;

// The no-op DO UPDATE makes RETURNING yield the id of the existing row.
const RESOLVE_EMAIL: &str = "INSERT INTO email (email_address, email_type) VALUES ($1, $2) \
     ON CONFLICT (email_address) DO UPDATE SET email_address = EXCLUDED.email_address \
     RETURNING email_id";

const RESOLVE_PHONE: &str = "INSERT INTO phone (country_code, area_code, local_number, phone_type, extension) \
     VALUES ($1, $2, $3, $4, $5) \
     ON CONFLICT (local_number) DO UPDATE SET local_number = EXCLUDED.local_number \
     RETURNING phone_id";

const INSERT_ADDRESS: &str = "INSERT INTO address \
     (address_line_1, address_line_2, address_line_3, city_locality, region_code, postal_code, country_iso_code) \
     VALUES ($1, $2, $3, $4, $5, $6, $7) \
     RETURNING address_id";

/// A contact value to resolve to a row identity.
#[derive(Debug, Clone, Copy)]
pub enum NewValue<'a> {
    Email(&'a EmailInput),
    Phone(&'a PhoneInput),
    Address(&'a AddressInput),
}

impl NewValue<'_> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Email(_) => ValueKind::Email,
            Self::Phone(_) => ValueKind::Phone,
            Self::Address(_) => ValueKind::Address,
        }
    }
}

/// Return the identity of the row holding `value`, inserting it if needed.
///
/// Emails are keyed on the address and phones on the local number: resolving
/// an existing key returns the existing identity and leaves its other columns
/// as they were. Addresses are never deduplicated.
pub async fn resolve(conn: &mut PgConnection, value: NewValue<'_>) -> ContactResult<i32> {
    let id = match value {
        NewValue::Email(email) => {
            sqlx::query_scalar::<_, i32>(RESOLVE_EMAIL)
                .bind(&email.email_address)
                .bind(email.email_type)
                .fetch_one(&mut *conn)
                .await?
        }
        NewValue::Phone(phone) => {
            sqlx::query_scalar::<_, i32>(RESOLVE_PHONE)
                .bind(&phone.country_code)
                .bind(&phone.area_code)
                .bind(&phone.local_number)
                .bind(phone.phone_type)
                .bind(&phone.extension)
                .fetch_one(&mut *conn)
                .await?
        }
        NewValue::Address(address) => {
            sqlx::query_scalar::<_, i32>(INSERT_ADDRESS)
                .bind(&address.address_line_1)
                .bind(&address.address_line_2)
                .bind(&address.address_line_3)
                .bind(&address.city_locality)
                .bind(&address.region_code)
                .bind(&address.postal_code)
                .bind(&address.country_iso_code)
                .fetch_one(&mut *conn)
                .await?
        }
    };

    tracing::debug!(kind = ?value.kind(), value_id = id, "Resolved contact value");
    Ok(id)
}
