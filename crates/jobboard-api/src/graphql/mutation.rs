//! Mutation root.

use async_graphql::{Context, ID, Object, Result};

use jobboard_entity::company::NewCompany;
use jobboard_entity::job::NewJob;

use super::query::{board, company_id, principal};
use super::schema::gql_error;
use super::types::{CompanyObject, JobObject, NewCompanyInput, NewJobInput};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates a company owned by the caller.
    async fn add_company(
        &self,
        ctx: &Context<'_>,
        input: NewCompanyInput,
    ) -> Result<CompanyObject> {
        board(ctx)?
            .create_company(&principal(ctx), NewCompany::from(input))
            .await
            .map(CompanyObject)
            .map_err(gql_error)
    }

    /// Posts a job under a company the caller owns.
    async fn create_job(
        &self,
        ctx: &Context<'_>,
        company_id: ID,
        input: NewJobInput,
    ) -> Result<JobObject> {
        let principal = principal(ctx);
        principal.require().map_err(gql_error)?;
        let company_id = self::company_id(&company_id)?;
        board(ctx)?
            .create_job(&principal, company_id, NewJob::from(input))
            .await
            .map(JobObject)
            .map_err(gql_error)
    }
}
