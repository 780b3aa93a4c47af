use crate::db::Database;
use crate::error::ContactResult;
use crate::models::{Country, Region};
use crate::repositories::traits::LookupRepository;
use async_trait::async_trait;

const LIST_COUNTRIES: &str = "SELECT iso_code_2, country_name FROM country ORDER BY country_name";

const LIST_REGIONS: &str = "SELECT country_iso_code, region_code, name, type FROM region \
     ORDER BY country_iso_code, name";

const LIST_REGIONS_BY_COUNTRY: &str = "SELECT country_iso_code, region_code, name, type FROM region \
     WHERE country_iso_code = $1 \
     ORDER BY name";

/// Reference data repository backed by Postgres.
#[derive(Debug, Clone)]
pub struct PgLookupRepository {
    db: Database,
}

impl PgLookupRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LookupRepository for PgLookupRepository {
    async fn countries(&self) -> ContactResult<Vec<Country>> {
        let mut conn = self.db.acquire().await?;
        let countries = sqlx::query_as::<_, Country>(LIST_COUNTRIES)
            .fetch_all(&mut *conn)
            .await?;
        Ok(countries)
    }

    async fn regions(&self) -> ContactResult<Vec<Region>> {
        let mut conn = self.db.acquire().await?;
        let regions = sqlx::query_as::<_, Region>(LIST_REGIONS)
            .fetch_all(&mut *conn)
            .await?;
        Ok(regions)
    }

    async fn regions_by_country(&self, country_iso_code: &str) -> ContactResult<Vec<Region>> {
        let mut conn = self.db.acquire().await?;
        let regions = sqlx::query_as::<_, Region>(LIST_REGIONS_BY_COUNTRY)
            .bind(country_iso_code.trim().to_uppercase())
            .fetch_all(&mut *conn)
            .await?;
        Ok(regions)
    }
}
