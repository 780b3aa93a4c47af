use crate::db::Database;
use crate::domain::OwnerRef;
use crate::error::{ContactError, ContactResult};
use crate::models::{NewPerson, Page, PageRequest, Person, PersonFilter, PersonPatch};
use crate::query::{SearchQuery, UpdateStatement, PERSON_TABLE};
use crate::repositories::paging::fetch_page_ids;
use crate::repositories::traits::PersonRepository;
use crate::store::{attach_contacts, load_contacts, ValueKind};
use async_trait::async_trait;
use sqlx::{Connection, PgConnection};

const SELECT_PERSON: &str = "SELECT person_id, first_name, middle_name, last_name, \
     birth_year, birth_month, birth_day, preferred_language, household_id \
     FROM person WHERE person_id = $1";

const INSERT_PERSON: &str = "INSERT INTO person \
     (first_name, middle_name, last_name, birth_year, birth_month, birth_day, preferred_language, household_id) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
     RETURNING person_id";

const PERSON_EXISTS: &str = "SELECT person_id FROM person WHERE person_id = $1 FOR UPDATE";

const DELETE_PERSON: &str = "DELETE FROM person WHERE person_id = $1";

/// Person repository backed by Postgres.
#[derive(Debug, Clone)]
pub struct PgPersonRepository {
    db: Database,
}

impl PgPersonRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    async fn fetch(conn: &mut PgConnection, id: i32) -> ContactResult<Option<Person>> {
        let person = sqlx::query_as::<_, Person>(SELECT_PERSON)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        match person {
            Some(mut person) => {
                person.contacts = load_contacts(conn, OwnerRef::person(id)).await?;
                Ok(Some(person))
            }
            None => Ok(None),
        }
    }

    async fn fetch_page(
        conn: &mut PgConnection,
        search: &SearchQuery,
        request: PageRequest,
    ) -> ContactResult<Page<Person>> {
        let (total, ids) = fetch_page_ids(conn, search, request).await?;

        let mut data = Vec::with_capacity(ids.len());
        for id in ids {
            // A row deleted between the page read and this one is skipped
            if let Some(person) = Self::fetch(conn, id).await? {
                data.push(person);
            }
        }
        Ok(Page::new(data, total, request))
    }

    fn search_query(filter: &PersonFilter) -> SearchQuery {
        SearchQuery::new(&PERSON_TABLE)
            .contains("first_name", filter.first_name.as_deref())
            .contains("last_name", filter.last_name.as_deref())
            .contact_contains(ValueKind::Email, "email_address", filter.email.as_deref())
            .contact_contains(ValueKind::Phone, "local_number", filter.phone.as_deref())
            .equals("household_id", filter.household_id)
    }
}

#[async_trait]
impl PersonRepository for PgPersonRepository {
    async fn get_by_id(&self, id: i32) -> ContactResult<Option<Person>> {
        let mut conn = self.db.acquire().await?;
        Self::fetch(&mut conn, id).await
    }

    async fn get_all(&self, request: PageRequest) -> ContactResult<Page<Person>> {
        let mut conn = self.db.acquire().await?;
        Self::fetch_page(&mut conn, &SearchQuery::new(&PERSON_TABLE), request).await
    }

    async fn search(
        &self,
        filter: &PersonFilter,
        request: PageRequest,
    ) -> ContactResult<Page<Person>> {
        let mut conn = self.db.acquire().await?;
        Self::fetch_page(&mut conn, &Self::search_query(filter), request).await
    }

    async fn create(&self, person: &NewPerson) -> ContactResult<Person> {
        let mut conn = self.db.acquire().await?;
        let mut tx = conn.begin().await?;

        let id = sqlx::query_scalar::<_, i32>(INSERT_PERSON)
            .bind(&person.first_name)
            .bind(&person.middle_name)
            .bind(&person.last_name)
            .bind(person.birth_year)
            .bind(person.birth_month)
            .bind(person.birth_day)
            .bind(&person.preferred_language)
            .bind(person.household_id)
            .fetch_one(&mut *tx)
            .await?;

        attach_contacts(&mut tx, OwnerRef::person(id), &person.contacts).await?;
        tx.commit().await?;

        tracing::info!(
            person_id = id,
            emails = person.contacts.emails.len(),
            phones = person.contacts.phones.len(),
            addresses = person.contacts.addresses.len(),
            "Created person"
        );

        Self::fetch(&mut conn, id)
            .await?
            .ok_or_else(|| ContactError::not_found("Person", id))
    }

    async fn update(&self, id: i32, patch: &PersonPatch) -> ContactResult<Person> {
        let mut conn = self.db.acquire().await?;
        let mut tx = conn.begin().await?;

        let exists = sqlx::query_scalar::<_, i32>(PERSON_EXISTS)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(ContactError::not_found("Person", id));
        }

        let mut update = UpdateStatement::new("person");
        update
            .set_some("first_name", &patch.first_name)
            .set_patch("middle_name", &patch.middle_name)
            .set_some("last_name", &patch.last_name)
            .set_patch("birth_year", &patch.birth_year)
            .set_patch("birth_month", &patch.birth_month)
            .set_patch("birth_day", &patch.birth_day)
            .set_patch("preferred_language", &patch.preferred_language)
            .set_patch("household_id", &patch.household_id);

        if let Some(mut statement) = update.finish("person_id", id) {
            statement.build().execute(&mut *tx).await?;
            tracing::info!(person_id = id, "Updated person");
        } else {
            tracing::debug!(person_id = id, "Empty person update");
        }
        tx.commit().await?;

        Self::fetch(&mut conn, id)
            .await?
            .ok_or_else(|| ContactError::not_found("Person", id))
    }

    async fn delete(&self, id: i32) -> ContactResult<()> {
        let mut conn = self.db.acquire().await?;

        let result = sqlx::query(DELETE_PERSON)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ContactError::not_found("Person", id));
        }

        tracing::info!(person_id = id, "Deleted person");
        Ok(())
    }
}
