//! Caller identity passed into every service operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use jobboard_auth::jwt::{Claims, TokenError};
use jobboard_core::error::AppError;
use jobboard_core::types::UserId;

/// Context for the current authenticated request.
///
/// Built from verified claims by the presentation layer so that every
/// operation knows *who* is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// Identifier of the token that authenticated the request.
    pub token_id: Uuid,
    /// When that token expires.
    pub token_expires_at: Option<DateTime<Utc>>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context for `user_id` outside of any token.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            token_id: Uuid::nil(),
            token_expires_at: None,
            request_time: Utc::now(),
        }
    }

    /// Creates a context from verified claims.
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            user_id: claims.user_id(),
            token_id: claims.jti,
            token_expires_at: claims.expires_at(),
            request_time: Utc::now(),
        }
    }
}

/// Why a request carries no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnonymousReason {
    /// No bearer credential was presented.
    MissingToken,
    /// The credential could not be parsed.
    Malformed,
    /// The signature did not verify.
    SignatureInvalid,
    /// The token expired.
    Expired,
}

impl AnonymousReason {
    fn message(&self) -> &'static str {
        match self {
            Self::MissingToken => "Authentication required",
            Self::Malformed => "Invalid token format",
            Self::SignatureInvalid => "Invalid token signature",
            Self::Expired => "Token has expired",
        }
    }
}

impl From<TokenError> for AnonymousReason {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Malformed => Self::Malformed,
            TokenError::SignatureInvalid => Self::SignatureInvalid,
            TokenError::Expired => Self::Expired,
        }
    }
}

/// The caller of a service operation, as resolved by the presentation layer.
#[derive(Debug, Clone)]
pub enum Principal {
    /// No valid claims accompanied the request.
    Anonymous(AnonymousReason),
    /// Claims verified.
    Authenticated(RequestContext),
}

impl Principal {
    /// Principal for a verified user, mainly for tests and tooling.
    pub fn user(user_id: UserId) -> Self {
        Self::Authenticated(RequestContext::new(user_id))
    }

    /// Returns the authenticated context or fails with `Unauthenticated`.
    pub fn require(&self) -> Result<&RequestContext, AppError> {
        match self {
            Self::Authenticated(ctx) => Ok(ctx),
            Self::Anonymous(reason) => {
                debug!(reason = ?reason, "Rejecting anonymous caller");
                Err(AppError::unauthenticated(reason.message()))
            }
        }
    }

    /// The caller's user id, if authenticated.
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Self::Authenticated(ctx) => Some(ctx.user_id),
            Self::Anonymous(_) => None,
        }
    }
}

impl From<Result<Claims, TokenError>> for Principal {
    fn from(parsed: Result<Claims, TokenError>) -> Self {
        match parsed {
            Ok(claims) => Self::Authenticated(RequestContext::from_claims(&claims)),
            Err(err) => Self::Anonymous(err.into()),
        }
    }
}
