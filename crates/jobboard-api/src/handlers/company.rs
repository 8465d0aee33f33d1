//! Company handlers.

use axum::Json;
use axum::extract::{Path, State};

use jobboard_core::types::CompanyId;
use jobboard_entity::company::{Company, NewCompany};
use jobboard_entity::job::Job;

use crate::dto::response::CompanyListResponse;
use crate::error::ApiError;
use crate::extractors::{CurrentPrincipal, JsonBody};
use crate::state::AppState;

/// POST /addcompany
pub async fn add_company(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    JsonBody(req): JsonBody<NewCompany>,
) -> Result<Json<Company>, ApiError> {
    let company = state.board.create_company(&principal, req).await?;
    Ok(Json(company))
}

/// POST /viewcompanyall
pub async fn view_all_companies(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<CompanyListResponse>, ApiError> {
    let companies = state.board.all_companies(&principal).await?;
    Ok(Json(CompanyListResponse { companies }))
}

/// POST /viewcompany/{company_id}
pub async fn view_company(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(company_id): Path<String>,
) -> Result<Json<Company>, ApiError> {
    principal.require()?;
    let company_id = CompanyId::parse(&company_id)?;

    let company = state.board.view_company(&principal, company_id).await?;
    Ok(Json(company))
}

/// GET /viewcompany/{company_id}
pub async fn company_jobs(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(company_id): Path<String>,
) -> Result<Json<Vec<Job>>, ApiError> {
    principal.require()?;
    let company_id = CompanyId::parse(&company_id)?;

    let jobs = state.board.jobs_by_company(&principal, company_id).await?;
    Ok(Json(jobs))
}
