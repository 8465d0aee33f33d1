//! PostgreSQL-backed entity store.

use async_trait::async_trait;
use sqlx::PgPool;

use jobboard_core::error::AppError;
use jobboard_core::result::AppResult;
use jobboard_core::types::{CompanyId, JobId, UserId};
use jobboard_entity::company::{Company, NewCompany};
use jobboard_entity::job::{Job, NewJob};
use jobboard_entity::user::{NewUser, User};

use super::EntityStore;
use crate::connection::{DatabasePool, ping};
use crate::repositories::{CompanyRepository, JobRepository, UserRepository};

/// Entity store delegating to the sqlx repositories.
#[derive(Debug, Clone)]
pub struct PgEntityStore {
    pool: PgPool,
    users: UserRepository,
    companies: CompanyRepository,
    jobs: JobRepository,
}

impl PgEntityStore {
    /// Builds the store over an established pool.
    pub fn new(db: &DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            users: UserRepository::new(pool.clone()),
            companies: CompanyRepository::new(pool.clone()),
            jobs: JobRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl EntityStore for PgEntityStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        self.users.create(&new_user).await
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.users.find_by_email(email).await
    }

    async fn find_user(&self, id: UserId) -> AppResult<Option<User>> {
        self.users.find_by_id(id).await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.find_all().await
    }

    async fn create_company(
        &self,
        new_company: NewCompany,
        owner_id: UserId,
    ) -> AppResult<Company> {
        self.companies.create(&new_company, owner_id).await
    }

    async fn get_company(&self, id: CompanyId) -> AppResult<Company> {
        self.companies
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Company {id} not found")))
    }

    async fn list_companies(&self) -> AppResult<Vec<Company>> {
        self.companies.find_all().await
    }

    async fn list_companies_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Company>> {
        self.companies.find_by_owner(owner_id).await
    }

    async fn create_job(&self, new_job: NewJob, company_id: CompanyId) -> AppResult<Job> {
        self.jobs.create(&new_job, company_id).await
    }

    async fn get_job(&self, id: JobId) -> AppResult<Job> {
        self.jobs
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Job {id} not found")))
    }

    async fn list_jobs_by_company(&self, company_id: CompanyId) -> AppResult<Vec<Job>> {
        self.jobs.find_by_company(company_id).await
    }

    async fn list_jobs(&self) -> AppResult<Vec<Job>> {
        self.jobs.find_all().await
    }

    async fn list_jobs_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Job>> {
        self.jobs.find_by_owner(owner_id).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        ping(&self.pool).await
    }
}
