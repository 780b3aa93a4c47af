use crate::db::Database;
use crate::domain::OwnerRef;
use crate::error::{ContactError, ContactResult};
use crate::models::{
    NewOrganization, Organization, OrganizationFilter, OrganizationPatch, Page, PageRequest,
};
use crate::query::{SearchQuery, UpdateStatement, ORGANIZATION_TABLE};
use crate::repositories::paging::fetch_page_ids;
use crate::repositories::traits::OrganizationRepository;
use crate::store::{attach_contacts, load_contacts};
use async_trait::async_trait;
use sqlx::{Connection, PgConnection};

const SELECT_ORGANIZATION: &str = "SELECT organization_id, name, website, parent_organization_id \
     FROM organization WHERE organization_id = $1";

const INSERT_ORGANIZATION: &str = "INSERT INTO organization (name, website, parent_organization_id) \
     VALUES ($1, $2, $3) \
     RETURNING organization_id";

const ORGANIZATION_EXISTS: &str =
    "SELECT organization_id FROM organization WHERE organization_id = $1 FOR UPDATE";

const DELETE_ORGANIZATION: &str = "DELETE FROM organization WHERE organization_id = $1";

/// Organization repository backed by Postgres.
#[derive(Debug, Clone)]
pub struct PgOrganizationRepository {
    db: Database,
}

impl PgOrganizationRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    async fn fetch(conn: &mut PgConnection, id: i32) -> ContactResult<Option<Organization>> {
        let organization = sqlx::query_as::<_, Organization>(SELECT_ORGANIZATION)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        match organization {
            Some(mut organization) => {
                organization.contacts = load_contacts(conn, OwnerRef::organization(id)).await?;
                Ok(Some(organization))
            }
            None => Ok(None),
        }
    }

    async fn fetch_page(
        conn: &mut PgConnection,
        search: &SearchQuery,
        request: PageRequest,
    ) -> ContactResult<Page<Organization>> {
        let (total, ids) = fetch_page_ids(conn, search, request).await?;

        let mut data = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(organization) = Self::fetch(conn, id).await? {
                data.push(organization);
            }
        }
        Ok(Page::new(data, total, request))
    }

    fn search_query(filter: &OrganizationFilter) -> SearchQuery {
        SearchQuery::new(&ORGANIZATION_TABLE)
            .contains("name", filter.name.as_deref())
            .contains("website", filter.website.as_deref())
    }
}

#[async_trait]
impl OrganizationRepository for PgOrganizationRepository {
    async fn get_by_id(&self, id: i32) -> ContactResult<Option<Organization>> {
        let mut conn = self.db.acquire().await?;
        Self::fetch(&mut conn, id).await
    }

    async fn get_all(&self, request: PageRequest) -> ContactResult<Page<Organization>> {
        let mut conn = self.db.acquire().await?;
        Self::fetch_page(&mut conn, &SearchQuery::new(&ORGANIZATION_TABLE), request).await
    }

    async fn search(
        &self,
        filter: &OrganizationFilter,
        request: PageRequest,
    ) -> ContactResult<Page<Organization>> {
        let mut conn = self.db.acquire().await?;
        Self::fetch_page(&mut conn, &Self::search_query(filter), request).await
    }

    async fn create(&self, organization: &NewOrganization) -> ContactResult<Organization> {
        let mut conn = self.db.acquire().await?;
        let mut tx = conn.begin().await?;

        let id = sqlx::query_scalar::<_, i32>(INSERT_ORGANIZATION)
            .bind(&organization.name)
            .bind(&organization.website)
            .bind(organization.parent_organization_id)
            .fetch_one(&mut *tx)
            .await?;

        attach_contacts(&mut tx, OwnerRef::organization(id), &organization.contacts).await?;
        tx.commit().await?;

        tracing::info!(
            organization_id = id,
            name = %organization.name,
            "Created organization"
        );

        Self::fetch(&mut conn, id)
            .await?
            .ok_or_else(|| ContactError::not_found("Organization", id))
    }

    async fn update(&self, id: i32, patch: &OrganizationPatch) -> ContactResult<Organization> {
        let mut conn = self.db.acquire().await?;
        let mut tx = conn.begin().await?;

        let exists = sqlx::query_scalar::<_, i32>(ORGANIZATION_EXISTS)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(ContactError::not_found("Organization", id));
        }

        let mut update = UpdateStatement::new("organization");
        update
            .set_some("name", &patch.name)
            .set_patch("website", &patch.website)
            .set_patch("parent_organization_id", &patch.parent_organization_id);

        if let Some(mut statement) = update.finish("organization_id", id) {
            statement.build().execute(&mut *tx).await?;
            tracing::info!(organization_id = id, "Updated organization");
        }
        tx.commit().await?;

        Self::fetch(&mut conn, id)
            .await?
            .ok_or_else(|| ContactError::not_found("Organization", id))
    }

    async fn delete(&self, id: i32) -> ContactResult<()> {
        let mut conn = self.db.acquire().await?;

        let result = sqlx::query(DELETE_ORGANIZATION)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ContactError::not_found("Organization", id));
        }

        tracing::info!(organization_id = id, "Deleted organization");
        Ok(())
    }
}
