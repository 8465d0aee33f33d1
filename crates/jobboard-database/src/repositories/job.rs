//! Job repository implementation.

use sqlx::PgPool;

use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::result::AppResult;
use jobboard_core::types::{CompanyId, JobId, UserId};
use jobboard_entity::job::{Job, NewJob};

/// Repository for job postings.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a job by primary key.
    pub async fn find_by_id(&self, id: JobId) -> AppResult<Option<Job>> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job", e))
    }

    /// List every job.
    pub async fn find_all(&self) -> AppResult<Vec<Job>> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list jobs", e))
    }

    /// List the jobs posted under a company.
    pub async fn find_by_company(&self, company_id: CompanyId) -> AppResult<Vec<Job>> {
        sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs WHERE company_id = $1 ORDER BY created_at, id",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list jobs by company", e)
        })
    }

    /// List the jobs under every company owned by a user.
    pub async fn find_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Job>> {
        sqlx::query_as::<_, Job>(
            "SELECT j.* FROM jobs j \
             JOIN companies c ON c.id = j.company_id \
             WHERE c.owner_id = $1 \
             ORDER BY j.created_at, j.id",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list jobs by owner", e))
    }

    /// Create a job. The parent company must exist; the foreign key makes
    /// the check and the insert a single statement.
    pub async fn create(&self, data: &NewJob, company_id: CompanyId) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "INSERT INTO jobs (id, title, experience_level, company_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(JobId::new())
        .bind(&data.title)
        .bind(&data.experience_level)
        .bind(company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("jobs_company_id_fkey") =>
            {
                AppError::not_found(format!("Company {company_id} not found"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create job", e),
        })
    }
}
