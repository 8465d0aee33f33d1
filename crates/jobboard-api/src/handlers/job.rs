//! Job handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use jobboard_core::types::{CompanyId, JobId};
use jobboard_entity::job::{Job, NewJob};

use crate::dto::response::JobListResponse;
use crate::error::ApiError;
use crate::extractors::{CurrentPrincipal, JsonBody};
use crate::state::AppState;

/// POST /createjob/{company_id}/jobs
pub async fn create_job(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(company_id): Path<String>,
    JsonBody(req): JsonBody<NewJob>,
) -> Result<(StatusCode, Json<Job>), ApiError> {
    principal.require()?;
    let company_id = CompanyId::parse(&company_id)?;

    let job = state.board.create_job(&principal, company_id, req).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// POST /viewjoball
pub async fn view_all_jobs(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<JobListResponse>, ApiError> {
    let jobs = state.board.all_jobs(&principal).await?;
    Ok(Json(JobListResponse { jobs }))
}

/// POST /viewjobbyid/{job_id}/jobs
pub async fn view_job(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(job_id): Path<String>,
) -> Result<Json<Job>, ApiError> {
    principal.require()?;
    let job_id = JobId::parse(&job_id)?;

    let job = state.board.view_job(&principal, job_id).await?;
    Ok(Json(job))
}
