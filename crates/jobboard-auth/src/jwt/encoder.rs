//! Bearer token issuing with a configured secret and TTL.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use jobboard_core::config::AuthConfig;
use jobboard_core::error::AppError;
use jobboard_core::types::UserId;

use super::claims::Claims;

/// Signs claim sets with HS256.
///
/// Built once from [`AuthConfig`] at startup and shared; the key never
/// changes for the life of the process.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in minutes.
    ttl_minutes: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish_non_exhaustive()
    }
}

/// A freshly signed token and the claims inside it.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Compact JWS serialization.
    pub token: String,
    /// The signed claims.
    pub claims: Claims,
}

impl IssuedToken {
    /// Expiration of the token.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.claims.expires_at().unwrap_or_else(Utc::now)
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_minutes: i64::try_from(config.jwt_ttl_minutes).unwrap_or(i64::MAX),
        }
    }

    /// Issues a token whose subject is `user_id`, valid for the configured TTL.
    pub fn issue(&self, user_id: UserId) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let exp = TimeDelta::try_minutes(self.ttl_minutes)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "Token TTL of {} minutes is out of range",
                    self.ttl_minutes
                ))
            })?;

        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
        };

        let token = self.encode(&claims)?;
        Ok(IssuedToken { token, claims })
    }

    /// Signs an arbitrary claim set.
    pub fn encode(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}
