//! GraphQL object and input types.

use async_graphql::{Context, ID, InputObject, Object, Result};
use chrono::{DateTime, Utc};

use jobboard_entity::company::{Company, NewCompany};
use jobboard_entity::job::{Job, NewJob};

use super::query::{board, principal};
use super::schema::gql_error;

/// A company as exposed over GraphQL.
pub struct CompanyObject(pub Company);

#[Object(name = "Company")]
impl CompanyObject {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn company_name(&self) -> &str {
        &self.0.company_name
    }

    async fn founded_year(&self) -> i32 {
        self.0.founded_year
    }

    async fn location(&self) -> &str {
        &self.0.location
    }

    async fn owner_id(&self) -> ID {
        ID(self.0.owner_id.to_string())
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }

    /// Jobs posted under this company, subject to the same ownership check
    /// as `jobsByCompany`.
    async fn jobs(&self, ctx: &Context<'_>) -> Result<Vec<JobObject>> {
        let jobs = board(ctx)?
            .jobs_by_company(&principal(ctx), self.0.id)
            .await
            .map_err(gql_error)?;
        Ok(jobs.into_iter().map(JobObject).collect())
    }
}

/// A job as exposed over GraphQL.
pub struct JobObject(pub Job);

#[Object(name = "Job")]
impl JobObject {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn experience_level(&self) -> &str {
        &self.0.experience_level
    }

    async fn company_id(&self) -> ID {
        ID(self.0.company_id.to_string())
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }
}

/// Input for `addCompany`.
#[derive(Debug, Clone, InputObject)]
pub struct NewCompanyInput {
    pub company_name: String,
    pub founded_year: i32,
    pub location: String,
}

impl From<NewCompanyInput> for NewCompany {
    fn from(input: NewCompanyInput) -> Self {
        Self {
            company_name: input.company_name,
            founded_year: input.founded_year,
            location: input.location,
        }
    }
}

/// Input for `createJob`.
#[derive(Debug, Clone, InputObject)]
pub struct NewJobInput {
    pub title: String,
    pub experience_level: String,
}

impl From<NewJobInput> for NewJob {
    fn from(input: NewJobInput) -> Self {
        Self {
            title: input.title,
            experience_level: input.experience_level,
        }
    }
}
