//! Sample inputs for integration tests.

use contact_store::{
    AddressInput, AddressType, EmailInput, EmailType, NewOrganization, NewPerson, PhoneInput,
    PhoneType,
};

/// A person with one primary work email and nothing else.
#[allow(dead_code)]
pub fn sample_person(first_name: &str, last_name: &str, email: &str) -> NewPerson {
    let mut person = NewPerson::new(first_name, last_name);
    person
        .contacts
        .emails
        .push(EmailInput::new(email, EmailType::Work).primary());
    person
}

/// A person with an email, a mobile phone and a home address.
#[allow(dead_code)]
pub fn sample_person_full(first_name: &str, last_name: &str) -> NewPerson {
    let mut person = NewPerson::new(first_name, last_name);
    person.middle_name = Some("Q".to_string());
    person.birth_year = Some(1985);
    person.birth_month = Some(7);
    person.birth_day = Some(14);
    person.preferred_language = Some("en".to_string());

    let email = format!(
        "{}.{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    );
    person.contacts.emails = vec![
        EmailInput::new(email, EmailType::Personal).primary(),
    ];
    person.contacts.phones = vec![PhoneInput::new("555-0100", PhoneType::Mobile).primary()];
    person.contacts.addresses = vec![sample_address("1 Elm St")];
    person
}

/// An organization with a website and no contacts.
#[allow(dead_code)]
pub fn sample_organization(name: &str, website: &str) -> NewOrganization {
    NewOrganization::new(name).with_website(website)
}

/// An Austin address with no explicit role.
#[allow(dead_code)]
pub fn sample_address(line_1: &str) -> AddressInput {
    let mut address = AddressInput::new(line_1, "Austin", "US");
    address.region_code = Some("TX".to_string());
    address.postal_code = Some("73301".to_string());
    address
}

/// An address with an explicit role.
#[allow(dead_code)]
pub fn sample_address_with_type(line_1: &str, address_type: AddressType) -> AddressInput {
    sample_address(line_1).with_type(address_type)
}
