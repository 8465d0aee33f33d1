//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jobboard_core::types::UserId;
use jobboard_entity::company::Company;
use jobboard_entity::job::Job;
use jobboard_entity::user::User;

/// User summary returned by signup. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Signup time.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token.
    pub token: String,
}

/// `POST /viewcompanyall` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyListResponse {
    pub companies: Vec<Company>,
}

/// `POST /viewjoball` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when the store answered, `degraded` otherwise.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Store backend in use.
    pub store: String,
}
