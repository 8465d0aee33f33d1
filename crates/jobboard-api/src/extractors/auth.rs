//! Caller resolution from the `Authorization: Bearer` header.
//!
//! REST handlers and the GraphQL endpoint both go through
//! [`resolve_principal`], so the two surfaces see identical identities.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};
use tracing::debug;

use jobboard_auth::jwt::JwtDecoder;
use jobboard_service::context::{AnonymousReason, Principal};

use crate::state::AppState;

/// Derives the caller from request headers.
///
/// Never fails: a missing or unusable token yields an anonymous principal
/// and the service decides whether that is acceptable.
pub fn resolve_principal(headers: &HeaderMap, decoder: &JwtDecoder) -> Principal {
    let Some(Authorization(bearer)) = headers.typed_get::<Authorization<Bearer>>() else {
        let reason = if headers.contains_key(AUTHORIZATION) {
            AnonymousReason::Malformed
        } else {
            AnonymousReason::MissingToken
        };
        return Principal::Anonymous(reason);
    };

    let principal = Principal::from(decoder.parse(bearer.token()));
    if let Principal::Anonymous(reason) = &principal {
        debug!(reason = ?reason, "Bearer token rejected");
    }
    principal
}

/// The resolved caller of the current request.
#[derive(Debug, Clone)]
pub struct CurrentPrincipal(pub Principal);

impl FromRequestParts<AppState> for CurrentPrincipal {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(resolve_principal(&parts.headers, &state.jwt_decoder)))
    }
}
