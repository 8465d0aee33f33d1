//! Job posting entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use jobboard_core::types::{CompanyId, JobId};

use crate::validation::non_blank;

/// A job posted under a company. Ownership follows the company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Job {
    /// Unique job identifier.
    pub id: JobId,
    /// Job title.
    pub title: String,
    /// Required experience level.
    pub experience_level: String,
    /// Parent company.
    pub company_id: CompanyId,
    /// When the job was posted.
    pub created_at: DateTime<Utc>,
}

/// Client-supplied data for a new job. The parent company comes from the
/// route or resolver argument, never from the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NewJob {
    /// Job title.
    #[validate(
        custom(function = "non_blank", message = "title is required"),
        length(max = 200, message = "title is too long")
    )]
    pub title: String,
    /// Required experience level.
    #[serde(alias = "experience_required")]
    #[validate(
        custom(function = "non_blank", message = "experience_level is required"),
        length(max = 100, message = "experience_level is too long")
    )]
    pub experience_level: String,
}
