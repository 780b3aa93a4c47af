use crate::db::Database;
use crate::error::ContactResult;
use crate::models::{Household, NewHousehold};
use crate::repositories::traits::HouseholdRepository;
use async_trait::async_trait;

const SELECT_HOUSEHOLD: &str =
    "SELECT household_id, household_name, primary_address_id FROM household WHERE household_id = $1";

const INSERT_HOUSEHOLD: &str = "INSERT INTO household (household_name, primary_address_id) \
     VALUES ($1, $2) \
     RETURNING household_id, household_name, primary_address_id";

/// Household repository backed by Postgres.
#[derive(Debug, Clone)]
pub struct PgHouseholdRepository {
    db: Database,
}

impl PgHouseholdRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HouseholdRepository for PgHouseholdRepository {
    async fn get_by_id(&self, id: i32) -> ContactResult<Option<Household>> {
        let mut conn = self.db.acquire().await?;
        let household = sqlx::query_as::<_, Household>(SELECT_HOUSEHOLD)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(household)
    }

    async fn create(&self, household: &NewHousehold) -> ContactResult<Household> {
        let mut conn = self.db.acquire().await?;
        let created = sqlx::query_as::<_, Household>(INSERT_HOUSEHOLD)
            .bind(&household.household_name)
            .bind(household.primary_address_id)
            .fetch_one(&mut *conn)
            .await?;

        tracing::info!(household_id = created.household_id, "Created household");
        Ok(created)
    }
}
