//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use jobboard_core::types::UserId;

/// A registered job board user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address, unique and stored normalized.
    pub email: String,
    /// Argon2id password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// When the user signed up.
    pub created_at: DateTime<Utc>,
}

/// Data required to persist a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address. Normalized by [`NewUser::new`].
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

impl NewUser {
    /// Builds a new user record with a normalized email.
    pub fn new(name: impl Into<String>, email: &str, password_hash: String) -> Self {
        Self {
            name: name.into().trim().to_string(),
            email: normalize_email(email),
            password_hash,
        }
    }
}

/// Canonical form of an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
