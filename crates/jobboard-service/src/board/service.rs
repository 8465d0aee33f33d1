//! Company and job operations scoped to the caller's ownership.

use std::sync::Arc;

use tracing::{debug, info, warn};

use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::types::{CompanyId, JobId};
use jobboard_database::EntityStore;
use jobboard_entity::company::{Company, NewCompany};
use jobboard_entity::job::{Job, NewJob};
use jobboard_entity::validation::validate_input;

use crate::context::{Principal, RequestContext};

/// Enforces that a user may only view and extend the companies they own.
///
/// Every operation resolves the caller first and fails `Unauthenticated`
/// before touching the store. A missing target is reported as `NotFound`
/// even when the caller would not have owned it.
#[derive(Debug, Clone)]
pub struct BoardService {
    /// Entity store.
    store: Arc<dyn EntityStore>,
}

impl BoardService {
    /// Creates a new board service.
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Creates a company owned by the caller.
    pub async fn create_company(
        &self,
        principal: &Principal,
        input: NewCompany,
    ) -> Result<Company, AppError> {
        let ctx = principal.require()?;
        validate_input(&input)?;

        let company = self.store.create_company(input, ctx.user_id).await?;
        info!(
            company_id = %company.id,
            owner_id = %ctx.user_id,
            "Company created"
        );
        Ok(company)
    }

    /// Lists the companies the caller owns.
    pub async fn all_companies(&self, principal: &Principal) -> Result<Vec<Company>, AppError> {
        let ctx = principal.require()?;
        self.store.list_companies_by_owner(ctx.user_id).await
    }

    /// Returns a company the caller owns.
    pub async fn view_company(
        &self,
        principal: &Principal,
        company_id: CompanyId,
    ) -> Result<Company, AppError> {
        let ctx = principal.require()?;
        self.owned_company(ctx, company_id).await
    }

    /// Lists the jobs of a company the caller owns.
    pub async fn jobs_by_company(
        &self,
        principal: &Principal,
        company_id: CompanyId,
    ) -> Result<Vec<Job>, AppError> {
        let ctx = principal.require()?;
        let company = self.owned_company(ctx, company_id).await?;
        self.store.list_jobs_by_company(company.id).await
    }

    /// Posts a job under a company the caller owns.
    pub async fn create_job(
        &self,
        principal: &Principal,
        company_id: CompanyId,
        input: NewJob,
    ) -> Result<Job, AppError> {
        let ctx = principal.require()?;
        validate_input(&input)?;

        let company = self.owned_company(ctx, company_id).await?;
        let job = self.store.create_job(input, company.id).await?;
        info!(
            job_id = %job.id,
            company_id = %company.id,
            owner_id = %ctx.user_id,
            "Job created"
        );
        Ok(job)
    }

    /// Returns a job under a company the caller owns.
    pub async fn view_job(&self, principal: &Principal, job_id: JobId) -> Result<Job, AppError> {
        let ctx = principal.require()?;

        let job = self.store.get_job(job_id).await.inspect_err(|e| {
            if e.is(ErrorKind::NotFound) {
                debug!(job_id = %job_id, user_id = %ctx.user_id, "Job not found");
            }
        })?;
        self.owned_company(ctx, job.company_id).await?;
        Ok(job)
    }

    /// Lists the jobs under every company the caller owns.
    pub async fn all_jobs(&self, principal: &Principal) -> Result<Vec<Job>, AppError> {
        let ctx = principal.require()?;
        self.store.list_jobs_by_owner(ctx.user_id).await
    }

    /// Fetches a company and checks that the caller owns it.
    async fn owned_company(
        &self,
        ctx: &RequestContext,
        company_id: CompanyId,
    ) -> Result<Company, AppError> {
        let company = self.store.get_company(company_id).await.inspect_err(|e| {
            if e.is(ErrorKind::NotFound) {
                debug!(company_id = %company_id, user_id = %ctx.user_id, "Company not found");
            }
        })?;

        if !company.is_owned_by(ctx.user_id) {
            warn!(
                company_id = %company_id,
                user_id = %ctx.user_id,
                "Access to company owned by another user denied"
            );
            return Err(AppError::forbidden(
                "You do not have access to this company",
            ));
        }

        Ok(company)
    }
}
