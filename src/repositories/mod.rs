mod paging;
mod pg_household_repository;
mod pg_lookup_repository;
mod pg_organization_repository;
mod pg_person_repository;
mod traits;

pub use pg_household_repository::PgHouseholdRepository;
pub use pg_lookup_repository::PgLookupRepository;
pub use pg_organization_repository::PgOrganizationRepository;
pub use pg_person_repository::PgPersonRepository;
pub use traits::{HouseholdRepository, LookupRepository, OrganizationRepository, PersonRepository};
