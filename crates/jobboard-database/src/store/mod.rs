//! The entity store capability and its implementations.
//!
//! Services depend on `Arc<dyn EntityStore>` only. [`PgEntityStore`] is the
//! production backend; [`MemoryStore`] backs tests and the `memory` dev mode.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use jobboard_core::result::AppResult;
use jobboard_core::types::{CompanyId, JobId, UserId};
use jobboard_entity::company::{Company, NewCompany};
use jobboard_entity::job::{Job, NewJob};
use jobboard_entity::user::{NewUser, User};

pub use memory::MemoryStore;
pub use postgres::PgEntityStore;

/// Persistence of users, companies and jobs.
///
/// Implementations must be thread-safe. Every write is atomic: it either
/// fully applies or leaves the store unchanged. Listings are ordered by
/// creation time, then identifier.
#[async_trait]
pub trait EntityStore: Send + Sync + std::fmt::Debug {
    /// Short backend name for health reporting.
    fn backend(&self) -> &'static str;

    /// Persists a new user. Fails with `DuplicateEmail` if the normalized
    /// email is taken.
    async fn create_user(&self, new_user: NewUser) -> AppResult<User>;

    /// Looks up a user by normalized email.
    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Looks up a user by id.
    async fn find_user(&self, id: UserId) -> AppResult<Option<User>>;

    /// Lists every user.
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Persists a company owned by `owner_id`. Fails with
    /// `Unauthenticated` when `owner_id` names no stored user.
    async fn create_company(&self, new_company: NewCompany, owner_id: UserId)
    -> AppResult<Company>;

    /// Fetches a company. Fails with `NotFound` if absent.
    async fn get_company(&self, id: CompanyId) -> AppResult<Company>;

    /// Lists every company regardless of owner.
    async fn list_companies(&self) -> AppResult<Vec<Company>>;

    /// Lists the companies owned by `owner_id`.
    async fn list_companies_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Company>>;

    /// Persists a job under `company_id`. Fails with `NotFound` if the
    /// company does not exist, in which case nothing is written.
    async fn create_job(&self, new_job: NewJob, company_id: CompanyId) -> AppResult<Job>;

    /// Fetches a job. Fails with `NotFound` if absent.
    async fn get_job(&self, id: JobId) -> AppResult<Job>;

    /// Lists the jobs posted under `company_id`.
    async fn list_jobs_by_company(&self, company_id: CompanyId) -> AppResult<Vec<Job>>;

    /// Lists every job regardless of owner.
    async fn list_jobs(&self) -> AppResult<Vec<Job>>;

    /// Lists the jobs under companies owned by `owner_id`.
    async fn list_jobs_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Job>>;

    /// Checks that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
