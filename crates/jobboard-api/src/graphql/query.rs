//! Query root.

use std::sync::Arc;

use async_graphql::{Context, ID, Object, Result};

use jobboard_core::error::AppError;
use jobboard_core::types::{CompanyId, JobId};
use jobboard_service::BoardService;
use jobboard_service::context::{AnonymousReason, Principal};

use super::schema::gql_error;
use super::types::{CompanyObject, JobObject};

/// Fetches the board service from schema data.
pub(crate) fn board<'a>(ctx: &Context<'a>) -> Result<&'a Arc<BoardService>> {
    ctx.data::<Arc<BoardService>>()
}

/// The caller attached to this request, anonymous if none was attached.
pub(crate) fn principal(ctx: &Context<'_>) -> Principal {
    ctx.data_opt::<Principal>()
        .cloned()
        .unwrap_or(Principal::Anonymous(AnonymousReason::MissingToken))
}

pub(crate) fn company_id(id: &ID) -> Result<CompanyId> {
    CompanyId::parse(id.as_str()).map_err(gql_error)
}

pub(crate) fn job_id(id: &ID) -> Result<JobId> {
    JobId::parse(id.as_str()).map_err(gql_error)
}

fn into_gql<T>(result: std::result::Result<T, AppError>) -> Result<T> {
    result.map_err(gql_error)
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Companies owned by the caller.
    async fn all_companies(&self, ctx: &Context<'_>) -> Result<Vec<CompanyObject>> {
        let companies = into_gql(board(ctx)?.all_companies(&principal(ctx)).await)?;
        Ok(companies.into_iter().map(CompanyObject).collect())
    }

    /// A company owned by the caller.
    async fn find_company_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<CompanyObject> {
        let principal = principal(ctx);
        principal.require().map_err(gql_error)?;
        let company_id = company_id(&id)?;
        into_gql(board(ctx)?.view_company(&principal, company_id).await).map(CompanyObject)
    }

    /// Jobs under every company the caller owns.
    async fn all_jobs(&self, ctx: &Context<'_>) -> Result<Vec<JobObject>> {
        let jobs = into_gql(board(ctx)?.all_jobs(&principal(ctx)).await)?;
        Ok(jobs.into_iter().map(JobObject).collect())
    }

    /// A job under a company the caller owns.
    async fn find_job_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<JobObject> {
        let principal = principal(ctx);
        principal.require().map_err(gql_error)?;
        let job_id = job_id(&id)?;
        into_gql(board(ctx)?.view_job(&principal, job_id).await).map(JobObject)
    }

    /// Jobs of a company the caller owns.
    async fn jobs_by_company(&self, ctx: &Context<'_>, company_id: ID) -> Result<Vec<JobObject>> {
        let principal = principal(ctx);
        principal.require().map_err(gql_error)?;
        let company_id = self::company_id(&company_id)?;
        let jobs = into_gql(board(ctx)?.jobs_by_company(&principal, company_id).await)?;
        Ok(jobs.into_iter().map(JobObject).collect())
    }
}
