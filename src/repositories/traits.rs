use crate::error::ContactResult;
use crate::models::*;
use async_trait::async_trait;

/// Repository for persons and their contact values.
///
/// Every operation runs on one pooled connection; mutations run inside one
/// transaction and leave nothing behind when they fail.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Retrieve a single person with all contacts, or `None` if absent.
    async fn get_by_id(&self, id: i32) -> ContactResult<Option<Person>>;

    /// One page of persons ordered by last name, then first name.
    async fn get_all(&self, request: PageRequest) -> ContactResult<Page<Person>>;

    /// One page of persons matching every provided filter.
    async fn search(&self, filter: &PersonFilter, request: PageRequest)
        -> ContactResult<Page<Person>>;

    /// Create a person and link its nested contacts.
    async fn create(&self, person: &NewPerson) -> ContactResult<Person>;

    /// Update the fields present in `patch`.
    async fn update(&self, id: i32, patch: &PersonPatch) -> ContactResult<Person>;

    /// Delete a person. Links and contact values are left in place.
    async fn delete(&self, id: i32) -> ContactResult<()>;
}

/// Repository for organizations and their contact values.
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    /// Retrieve a single organization with all contacts, or `None` if absent.
    async fn get_by_id(&self, id: i32) -> ContactResult<Option<Organization>>;

    /// One page of organizations ordered by name.
    async fn get_all(&self, request: PageRequest) -> ContactResult<Page<Organization>>;

    /// One page of organizations matching every provided filter.
    async fn search(
        &self,
        filter: &OrganizationFilter,
        request: PageRequest,
    ) -> ContactResult<Page<Organization>>;

    /// Create an organization and link its nested contacts.
    ///
    /// Fails with `Conflict` when the name is already taken.
    async fn create(&self, organization: &NewOrganization) -> ContactResult<Organization>;

    /// Update the fields present in `patch`.
    async fn update(&self, id: i32, patch: &OrganizationPatch) -> ContactResult<Organization>;

    /// Delete an organization.
    ///
    /// Fails with `ReferentialIntegrity` while a child organization still
    /// references it as parent.
    async fn delete(&self, id: i32) -> ContactResult<()>;
}

/// Repository for households.
#[async_trait]
pub trait HouseholdRepository: Send + Sync {
    async fn get_by_id(&self, id: i32) -> ContactResult<Option<Household>>;

    async fn create(&self, household: &NewHousehold) -> ContactResult<Household>;
}

/// Read-only reference data.
#[async_trait]
pub trait LookupRepository: Send + Sync {
    /// All countries ordered by name.
    async fn countries(&self) -> ContactResult<Vec<Country>>;

    /// All regions ordered by country, then name.
    async fn regions(&self) -> ContactResult<Vec<Region>>;

    /// Regions of one country; the code is matched case-insensitively.
    async fn regions_by_country(&self, country_iso_code: &str) -> ContactResult<Vec<Region>>;
}
