//! Company repository implementation.

use sqlx::PgPool;

use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::result::AppResult;
use jobboard_core::types::{CompanyId, UserId};
use jobboard_entity::company::{Company, NewCompany};

/// Repository for company persistence.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    /// Create a new company repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a company by primary key.
    pub async fn find_by_id(&self, id: CompanyId) -> AppResult<Option<Company>> {
        sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find company", e))
    }

    /// List every company.
    pub async fn find_all(&self) -> AppResult<Vec<Company>> {
        sqlx::query_as::<_, Company>("SELECT * FROM companies ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list companies", e))
    }

    /// List the companies owned by a user.
    pub async fn find_by_owner(&self, owner_id: UserId) -> AppResult<Vec<Company>> {
        sqlx::query_as::<_, Company>(
            "SELECT * FROM companies WHERE owner_id = $1 ORDER BY created_at, id",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list companies by owner", e)
        })
    }

    /// Create a company owned by `owner_id`.
    pub async fn create(&self, data: &NewCompany, owner_id: UserId) -> AppResult<Company> {
        sqlx::query_as::<_, Company>(
            "INSERT INTO companies (id, company_name, founded_year, location, owner_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(CompanyId::new())
        .bind(&data.company_name)
        .bind(data.founded_year)
        .bind(&data.location)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("companies_owner_id_fkey") =>
            {
                AppError::unauthenticated("Account no longer exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create company", e),
        })
    }
}
