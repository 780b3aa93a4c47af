//! Integration tests for person create, read, update, delete and search.

use contact_store::{
    AddressType, ContactError, HouseholdRepository, NewHousehold, NewPerson, PageRequest, Patch,
    PersonFilter, PersonPatch, PersonRepository, PgHouseholdRepository, PgPersonRepository,
    EmailInput, EmailType,
};
use serial_test::serial;
use std::collections::HashSet;

mod support;
use support::{fixtures::*, *};

#[tokio::test]
#[serial]
async fn test_create_then_get_returns_same_aggregate() {
    let Some(db) = setup_test_db().await else { return };
    let repo = PgPersonRepository::new(db);

    let created = repo.create(&sample_person_full("Jane", "Doe")).await.unwrap();
    assert_eq!(created.first_name, "Jane");
    assert_eq!(created.middle_name.as_deref(), Some("Q"));
    assert_eq!(created.birth_year, Some(1985));
    assert_eq!(created.contacts.emails.len(), 1);
    assert_eq!(created.contacts.phones.len(), 1);
    assert_eq!(created.contacts.addresses.len(), 1);
    assert_eq!(created.contacts.emails[0].email_address, "jane.doe@example.com");
    assert!(created.contacts.emails[0].is_primary);
    assert_eq!(created.contacts.addresses[0].address_type, AddressType::Home);
    assert_eq!(created.contacts.addresses[0].country_iso_code, "US");

    let fetched = repo.get_by_id(created.person_id).await.unwrap();
    assert_eq!(fetched, Some(created));
}

#[tokio::test]
#[serial]
async fn test_contact_collections_always_present() {
    let Some(db) = setup_test_db().await else { return };
    let repo = PgPersonRepository::new(db);

    let created = repo.create(&NewPerson::new("Solo", "Person")).await.unwrap();
    assert!(created.contacts.emails.is_empty());
    assert!(created.contacts.phones.is_empty());
    assert!(created.contacts.addresses.is_empty());

    let json = serde_json::to_value(&created).unwrap();
    assert_eq!(json["emails"], serde_json::json!([]));
    assert_eq!(json["phones"], serde_json::json!([]));
    assert_eq!(json["addresses"], serde_json::json!([]));
}

#[tokio::test]
#[serial]
async fn test_get_missing_person_is_absent() {
    let Some(db) = setup_test_db().await else { return };
    let repo = PgPersonRepository::new(db);

    assert_eq!(repo.get_by_id(9999).await.unwrap(), None);
}

#[tokio::test]
#[serial]
async fn test_primary_email_listed_first() {
    let Some(db) = setup_test_db().await else { return };
    let repo = PgPersonRepository::new(db);

    let mut person = NewPerson::new("Ann", "Lee");
    person.contacts.emails = vec![
        EmailInput::new("ann.personal@example.com", EmailType::Personal),
        EmailInput::new("ann@work.example.com", EmailType::Work).primary(),
    ];
    let created = repo.create(&person).await.unwrap();

    let emails = &created.contacts.emails;
    assert_eq!(emails.len(), 2);
    assert_eq!(emails[0].email_address, "ann@work.example.com");
    assert!(emails[0].is_primary);
    assert!(!emails[1].is_primary);
}

#[tokio::test]
#[serial]
async fn test_empty_update_leaves_fields_unchanged() {
    let Some(db) = setup_test_db().await else { return };
    let repo = PgPersonRepository::new(db);

    let created = repo.create(&sample_person_full("John", "Smith")).await.unwrap();
    let updated = repo
        .update(created.person_id, &PersonPatch::default())
        .await
        .unwrap();

    assert_eq!(updated, created);
}

#[tokio::test]
#[serial]
async fn test_update_touches_only_present_fields() {
    let Some(db) = setup_test_db().await else { return };
    let repo = PgPersonRepository::new(db);

    let created = repo.create(&sample_person_full("John", "Smith")).await.unwrap();
    let patch = PersonPatch {
        first_name: Some("Johnny".to_string()),
        middle_name: Patch::Clear,
        birth_month: Patch::Set(1),
        ..Default::default()
    };
    let updated = repo.update(created.person_id, &patch).await.unwrap();

    assert_eq!(updated.first_name, "Johnny");
    assert_eq!(updated.middle_name, None);
    assert_eq!(updated.birth_month, Some(1));
    assert_eq!(updated.last_name, "Smith");
    assert_eq!(updated.birth_year, Some(1985));
    assert_eq!(updated.preferred_language.as_deref(), Some("en"));
    assert_eq!(updated.contacts, created.contacts);
}

#[tokio::test]
#[serial]
async fn test_update_keeps_zero_and_empty_values() {
    let Some(db) = setup_test_db().await else { return };
    let repo = PgPersonRepository::new(db);

    let created = repo.create(&sample_person_full("Zed", "Zero")).await.unwrap();
    let patch: PersonPatch =
        serde_json::from_str(r#"{"birth_day": 0, "preferred_language": ""}"#).unwrap();
    let updated = repo.update(created.person_id, &patch).await.unwrap();

    assert_eq!(updated.birth_day, Some(0));
    assert_eq!(updated.preferred_language.as_deref(), Some(""));
}

#[tokio::test]
#[serial]
async fn test_update_missing_person_is_not_found() {
    let Some(db) = setup_test_db().await else { return };
    let repo = PgPersonRepository::new(db);

    let patch = PersonPatch {
        first_name: Some("Nobody".to_string()),
        ..Default::default()
    };
    match repo.update(4242, &patch).await {
        Err(ContactError::NotFound { entity, id }) => {
            assert_eq!(entity, "Person");
            assert_eq!(id, 4242);
        }
        other => panic!("Expected NotFound, got: {:?}", other),
    }
}

#[tokio::test]
#[serial]
async fn test_delete_then_get_and_delete_again() {
    let Some(db) = setup_test_db().await else { return };
    let repo = PgPersonRepository::new(db.clone());

    let created = repo.create(&sample_person_full("Del", "Ete")).await.unwrap();
    repo.delete(created.person_id).await.unwrap();

    assert_eq!(repo.get_by_id(created.person_id).await.unwrap(), None);
    assert!(matches!(
        repo.delete(created.person_id).await,
        Err(ContactError::NotFound { .. })
    ));

    // Links and values outlive the owner
    assert_eq!(count_rows(&db, "email").await, 1);
    assert_eq!(count_rows(&db, "contact_email").await, 1);
}

#[tokio::test]
#[serial]
async fn test_pagination_covers_all_persons_without_overlap() {
    let Some(db) = setup_test_db().await else { return };
    let repo = PgPersonRepository::new(db);

    // Identical sort keys exercise the identity tie-break
    for first in ["Alex", "Alex", "Alex", "Blake", "Casey"] {
        repo.create(&NewPerson::new(first, "Smith")).await.unwrap();
    }

    let page_two = repo.get_all(PageRequest::new(2, 2)).await.unwrap();
    assert_eq!(page_two.data.len(), 2);
    assert_eq!(page_two.total, 5);
    assert_eq!(page_two.page, 2);
    assert_eq!(page_two.limit, 2);
    assert_eq!(page_two.total_pages(), 3);

    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for page in 1..=3 {
        let result = repo.get_all(PageRequest::new(page, 2)).await.unwrap();
        assert_eq!(result.total, 5);
        for person in result.data {
            assert!(seen.insert(person.person_id), "duplicate across pages");
            names.push(person.first_name);
        }
    }
    assert_eq!(seen.len(), 5);
    assert_eq!(names, vec!["Alex", "Alex", "Alex", "Blake", "Casey"]);
}

#[tokio::test]
#[serial]
async fn test_get_all_defaults() {
    let Some(db) = setup_test_db().await else { return };
    let repo = PgPersonRepository::new(db);

    repo.create(&NewPerson::new("Only", "One")).await.unwrap();
    let page = repo.get_all(PageRequest::default()).await.unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 20);
    assert_eq!(page.total, 1);
}

#[tokio::test]
#[serial]
async fn test_search_by_email_and_name() {
    let Some(db) = setup_test_db().await else { return };
    let repo = PgPersonRepository::new(db);

    repo.create(&sample_person("John", "Doe", "john@acme.com")).await.unwrap();
    repo.create(&sample_person("Jane", "Doe", "jane@other.com")).await.unwrap();
    repo.create(&sample_person("John", "Roe", "jroe@acme.com")).await.unwrap();

    let filter = PersonFilter {
        last_name: Some("doe".to_string()),
        email: Some("ACME".to_string()),
        ..Default::default()
    };
    let result = repo.search(&filter, PageRequest::default()).await.unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.data[0].first_name, "John");
    assert_eq!(result.data[0].last_name, "Doe");
}

#[tokio::test]
#[serial]
async fn test_search_joins_do_not_duplicate_owners() {
    let Some(db) = setup_test_db().await else { return };
    let repo = PgPersonRepository::new(db);

    let mut person = NewPerson::new("Multi", "Mail");
    person.contacts.emails = vec![
        EmailInput::new("multi@example.com", EmailType::Work).primary(),
        EmailInput::new("multi.home@example.com", EmailType::Personal),
    ];
    repo.create(&person).await.unwrap();

    let filter = PersonFilter {
        email: Some("example.com".to_string()),
        ..Default::default()
    };
    let result = repo.search(&filter, PageRequest::default()).await.unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.data.len(), 1);
}

#[tokio::test]
#[serial]
async fn test_search_by_phone_and_household() {
    let Some(db) = setup_test_db().await else { return };
    let households = PgHouseholdRepository::new(db.clone());
    let repo = PgPersonRepository::new(db);

    let household = households
        .create(&NewHousehold {
            household_name: "The Does".to_string(),
            primary_address_id: None,
        })
        .await
        .unwrap();

    let mut member = sample_person_full("Jane", "Doe");
    member.household_id = Some(household.household_id);
    let member = repo.create(&member).await.unwrap();
    repo.create(&NewPerson::new("Not", "Member")).await.unwrap();

    let by_household = PersonFilter {
        household_id: Some(household.household_id),
        ..Default::default()
    };
    let result = repo.search(&by_household, PageRequest::default()).await.unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.data[0].person_id, member.person_id);

    let by_phone = PersonFilter {
        phone: Some("0100".to_string()),
        ..Default::default()
    };
    let result = repo.search(&by_phone, PageRequest::default()).await.unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.data[0].person_id, member.person_id);
}

#[tokio::test]
#[serial]
async fn test_empty_string_filter_matches_everything() {
    let Some(db) = setup_test_db().await else { return };
    let repo = PgPersonRepository::new(db);

    repo.create(&NewPerson::new("A", "One")).await.unwrap();
    repo.create(&NewPerson::new("B", "Two")).await.unwrap();

    let filter = PersonFilter {
        first_name: Some(String::new()),
        ..Default::default()
    };
    let result = repo.search(&filter, PageRequest::default()).await.unwrap();
    assert_eq!(result.total, 2);
}

#[tokio::test]
#[serial]
async fn test_address_primary_follows_household() {
    let Some(db) = setup_test_db().await else { return };
    let households = PgHouseholdRepository::new(db.clone());
    let repo = PgPersonRepository::new(db);

    let mut person = NewPerson::new("Home", "Owner");
    person.contacts.addresses = vec![
        sample_address("10 Main St"),
        sample_address_with_type("99 Market St", AddressType::Billing),
    ];
    let created = repo.create(&person).await.unwrap();
    assert!(created.contacts.addresses.iter().all(|a| !a.is_primary));

    let home_id = created.contacts.addresses[0].address_id;
    let household = households
        .create(&NewHousehold {
            household_name: "Owners".to_string(),
            primary_address_id: Some(home_id),
        })
        .await
        .unwrap();
    assert_eq!(
        households.get_by_id(household.household_id).await.unwrap(),
        Some(household.clone())
    );

    let patch = PersonPatch {
        household_id: Patch::Set(household.household_id),
        ..Default::default()
    };
    let updated = repo.update(created.person_id, &patch).await.unwrap();

    let addresses = &updated.contacts.addresses;
    assert_eq!(addresses.len(), 2);
    assert_eq!(addresses[0].address_id, home_id);
    assert!(addresses[0].is_primary);
    assert_eq!(addresses[0].address_type, AddressType::Home);
    assert!(!addresses[1].is_primary);
    assert_eq!(addresses[1].address_type, AddressType::Billing);
}

#[tokio::test]
#[serial]
async fn test_missing_household_is_referential_integrity() {
    let Some(db) = setup_test_db().await else { return };
    let repo = PgPersonRepository::new(db.clone());

    let mut person = sample_person_full("Lost", "Member");
    person.household_id = Some(777);
    match repo.create(&person).await {
        Err(ContactError::ReferentialIntegrity { constraint, .. }) => {
            assert_eq!(constraint, "fk_person_household");
        }
        other => panic!("Expected ReferentialIntegrity, got: {:?}", other),
    }
    assert_eq!(count_rows(&db, "person").await, 0);
    assert_eq!(count_rows(&db, "email").await, 0);
}
