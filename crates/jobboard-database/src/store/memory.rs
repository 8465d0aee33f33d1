//! In-memory entity store using a Tokio `RwLock` for single-process use.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use jobboard_core::error::AppError;
use jobboard_core::result::AppResult;
use jobboard_core::types::{CompanyId, JobId, UserId};
use jobboard_entity::company::{Company, NewCompany};
use jobboard_entity::job::{Job, NewJob};
use jobboard_entity::user::{NewUser, User};

use super::EntityStore;

/// Tables held by the memory store. Ids are UUIDv7, so key order is
/// creation order.
#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    companies: BTreeMap<CompanyId, Company>,
    jobs: BTreeMap<JobId, Job>,
}

/// Entity store that keeps everything in process memory.
///
/// Each write holds the write lock for its whole check-then-insert
/// sequence, so writes are atomic with respect to each other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.email == new_user.email) {
            return Err(AppError::duplicate_email("Email already in use"));
        }

        let user = User {
            id: UserId::new(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };
        tables.users.insert(user.id, user.clone());
        debug!(user_id = %user.id, "User stored in memory");
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<_> = tables.users.values().cloned().collect();
        rows.sort_by_key(|u| (u.created_at, u.id));
        Ok(rows)
    }

    async fn create_company(
        &self,
        new_company: NewCompany,
        owner_id: UserId,
    ) -> AppResult<Company> {
        let mut tables = self.tables.write().await;

        if !tables.users.contains_key(&owner_id) {
            return Err(AppError::unauthenticated("Account no longer exists"));
        }

        let company = Company {
            id: CompanyId::new(),
            company_name: new_company.company_name,
            founded_year: new_company.founded_year,
            location: new_company.location,
            owner_id,
            created_at: Utc::now(),
        };
        tables.companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn get_company(&self, id: CompanyId) -> AppResult<Company> {
        self.tables
            .read()
            .await
            .companies
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Company {id} not found")))
    }

    async fn list_companies(&self) -> AppResult<Vec<Company>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<_> = tables.companies.values().cloned().collect();
        rows.sort_by_key(|c| (c.created_at, c.id));
        Ok(rows)
    }

    async fn list_companies_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Company>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<_> = tables
            .companies
            .values()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect();
        rows.sort_by_key(|c| (c.created_at, c.id));
        Ok(rows)
    }

    async fn create_job(&self, new_job: NewJob, company_id: CompanyId) -> AppResult<Job> {
        let mut tables = self.tables.write().await;

        if !tables.companies.contains_key(&company_id) {
            return Err(AppError::not_found(format!("Company {company_id} not found")));
        }

        let job = Job {
            id: JobId::new(),
            title: new_job.title,
            experience_level: new_job.experience_level,
            company_id,
            created_at: Utc::now(),
        };
        tables.jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn get_job(&self, id: JobId) -> AppResult<Job> {
        self.tables
            .read()
            .await
            .jobs
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Job {id} not found")))
    }

    async fn list_jobs_by_company(&self, company_id: CompanyId) -> AppResult<Vec<Job>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<_> = tables
            .jobs
            .values()
            .filter(|j| j.company_id == company_id)
            .cloned()
            .collect();
        rows.sort_by_key(|j| (j.created_at, j.id));
        Ok(rows)
    }

    async fn list_jobs(&self) -> AppResult<Vec<Job>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<_> = tables.jobs.values().cloned().collect();
        rows.sort_by_key(|j| (j.created_at, j.id));
        Ok(rows)
    }

    async fn list_jobs_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Job>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<_> = tables
            .jobs
            .values()
            .filter(|j| {
                tables
                    .companies
                    .get(&j.company_id)
                    .is_some_and(|c| c.owner_id == owner_id)
            })
            .cloned()
            .collect();
        rows.sort_by_key(|j| (j.created_at, j.id));
        Ok(rows)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
