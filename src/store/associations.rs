//! Owner-to-value links.
//!
//! One generic statement per operation serves every `(OwnerKind, ValueKind)`
//! pair; the owner kind is a bound discriminant, and table names come from
//! [`ValueKind`].

use super::values::{resolve, NewValue};
use super::ValueKind;
use crate::domain::{AddressType, OwnerKind, OwnerRef};
use crate::error::{ContactError, ContactResult};
use crate::models::{Address, ContactSet, Email, NewContacts, Phone};
use sqlx::PgConnection;

const LIST_EMAILS: &str = "SELECT e.email_id, e.email_address, e.email_type, ce.is_primary \
     FROM email e \
     JOIN contact_email ce ON ce.email_id = e.email_id \
     WHERE ce.contact_id = $1 AND ce.contact_entity_type = $2 \
     ORDER BY ce.is_primary DESC, e.email_id";

const LIST_PHONES: &str = "SELECT p.phone_id, p.country_code, p.area_code, p.local_number, \
     p.phone_type, p.extension, cp.is_primary \
     FROM phone p \
     JOIN contact_phone cp ON cp.phone_id = p.phone_id \
     WHERE cp.contact_id = $1 AND cp.contact_entity_type = $2 \
     ORDER BY cp.is_primary DESC, p.phone_id";

// A person's address is primary iff it is their household's primary address.
const PERSON_ADDRESS_IS_PRIMARY: &str = "CASE WHEN a.address_id = (\
     SELECT h.primary_address_id FROM household h \
     JOIN person p ON p.household_id = h.household_id \
     WHERE p.person_id = $1) THEN true ELSE false END";

const ORGANIZATION_ADDRESS_IS_PRIMARY: &str = "false";

/// Attribute stored on a link row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAttributes {
    /// Email and phone links
    Primary(bool),
    /// Address links
    Role(AddressType),
}

impl LinkAttributes {
    fn fits(&self, kind: ValueKind) -> bool {
        matches!(
            (self, kind),
            (Self::Primary(_), ValueKind::Email | ValueKind::Phone)
                | (Self::Role(_), ValueKind::Address)
        )
    }
}

fn link_statement(kind: ValueKind) -> String {
    format!(
        "INSERT INTO {} (contact_id, {}, contact_entity_type, {}) VALUES ($1, $2, $3, $4)",
        kind.link_table(),
        kind.id_column(),
        kind.attribute_column()
    )
}

fn list_addresses_statement(owner_kind: OwnerKind) -> String {
    let is_primary = match owner_kind {
        OwnerKind::Person => PERSON_ADDRESS_IS_PRIMARY,
        OwnerKind::Organization => ORGANIZATION_ADDRESS_IS_PRIMARY,
    };
    format!(
        "SELECT a.address_id, a.address_line_1, a.address_line_2, a.address_line_3, \
         a.city_locality, a.region_code, a.postal_code, a.country_iso_code, \
         ca.address_type, {} AS is_primary \
         FROM address a \
         JOIN contact_address ca ON ca.address_id = a.address_id \
         WHERE ca.contact_id = $1 AND ca.contact_entity_type = $2 \
         ORDER BY a.address_id",
        is_primary
    )
}

/// Link one value to one owner.
///
/// Linking the same value to the same owner twice fails with
/// [`ContactError::DuplicateAssociation`]; the same value may be linked to any
/// number of different owners.
pub async fn link(
    conn: &mut PgConnection,
    owner: OwnerRef,
    kind: ValueKind,
    value_id: i32,
    attributes: LinkAttributes,
) -> ContactResult<()> {
    if !attributes.fits(kind) {
        return Err(ContactError::ValidationFailure(format!(
            "{:?} is not a valid attribute for a {} link",
            attributes,
            kind.value_table()
        )));
    }

    let sql = link_statement(kind);
    let query = sqlx::query(&sql)
        .bind(owner.id)
        .bind(value_id)
        .bind(owner.kind);
    let query = match attributes {
        LinkAttributes::Primary(is_primary) => query.bind(is_primary),
        LinkAttributes::Role(address_type) => query.bind(address_type),
    };
    query.execute(&mut *conn).await?;

    tracing::debug!(
        owner_id = owner.id,
        owner_kind = %owner.kind,
        kind = ?kind,
        value_id,
        "Linked contact value"
    );
    Ok(())
}

/// Resolve and link every nested contact value of a new owner.
pub async fn attach_contacts(
    conn: &mut PgConnection,
    owner: OwnerRef,
    contacts: &NewContacts,
) -> ContactResult<()> {
    for email in &contacts.emails {
        let value_id = resolve(conn, NewValue::Email(email)).await?;
        link(
            conn,
            owner,
            ValueKind::Email,
            value_id,
            LinkAttributes::Primary(email.is_primary),
        )
        .await?;
    }

    for phone in &contacts.phones {
        let value_id = resolve(conn, NewValue::Phone(phone)).await?;
        link(
            conn,
            owner,
            ValueKind::Phone,
            value_id,
            LinkAttributes::Primary(phone.is_primary),
        )
        .await?;
    }

    for address in &contacts.addresses {
        let value_id = resolve(conn, NewValue::Address(address)).await?;
        let role = address
            .address_type
            .unwrap_or_else(|| owner.kind.default_address_type());
        link(conn, owner, ValueKind::Address, value_id, LinkAttributes::Role(role)).await?;
    }

    Ok(())
}

/// Emails linked to `owner`, primary first, then by identity.
pub async fn list_emails(conn: &mut PgConnection, owner: OwnerRef) -> ContactResult<Vec<Email>> {
    let emails = sqlx::query_as::<_, Email>(LIST_EMAILS)
        .bind(owner.id)
        .bind(owner.kind)
        .fetch_all(&mut *conn)
        .await?;
    Ok(emails)
}

/// Phones linked to `owner`, primary first, then by identity.
pub async fn list_phones(conn: &mut PgConnection, owner: OwnerRef) -> ContactResult<Vec<Phone>> {
    let phones = sqlx::query_as::<_, Phone>(LIST_PHONES)
        .bind(owner.id)
        .bind(owner.kind)
        .fetch_all(&mut *conn)
        .await?;
    Ok(phones)
}

/// Addresses linked to `owner`, by identity.
pub async fn list_addresses(
    conn: &mut PgConnection,
    owner: OwnerRef,
) -> ContactResult<Vec<Address>> {
    let sql = list_addresses_statement(owner.kind);
    let addresses = sqlx::query_as::<_, Address>(&sql)
        .bind(owner.id)
        .bind(owner.kind)
        .fetch_all(&mut *conn)
        .await?;
    Ok(addresses)
}

/// Every contact value linked to `owner`.
pub async fn load_contacts(conn: &mut PgConnection, owner: OwnerRef) -> ContactResult<ContactSet> {
    Ok(ContactSet {
        emails: list_emails(conn, owner).await?,
        phones: list_phones(conn, owner).await?,
        addresses: list_addresses(conn, owner).await?,
    })
}
