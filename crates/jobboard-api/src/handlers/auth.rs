//! Signup and login handlers.

use axum::Json;
use axum::extract::State;

use jobboard_service::{LoginInput, SignupInput};

use crate::dto::response::{TokenResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignupInput>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.accounts.signup(req).await?;
    Ok(Json(user.into()))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginInput>,
) -> Result<Json<TokenResponse>, ApiError> {
    let outcome = state.accounts.login(req).await?;
    Ok(Json(TokenResponse {
        token: outcome.token,
    }))
}
