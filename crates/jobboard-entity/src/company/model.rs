//! Company entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use jobboard_core::types::{CompanyId, UserId};

use crate::validation::non_blank;

/// A company registered by a user. The owner never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Company {
    /// Unique company identifier.
    pub id: CompanyId,
    /// Company name.
    pub company_name: String,
    /// Year the company was founded.
    pub founded_year: i32,
    /// Headquarters location.
    pub location: String,
    /// The user who created, and therefore owns, the company.
    pub owner_id: UserId,
    /// When the company was created.
    pub created_at: DateTime<Utc>,
}

impl Company {
    /// Whether `user_id` owns this company.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// Client-supplied data for a new company.
///
/// The owner is deliberately absent: it is stamped from the caller's
/// identity. Missing fields deserialize as empty and fail validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NewCompany {
    /// Company name.
    #[validate(
        custom(function = "non_blank", message = "company_name is required"),
        length(max = 200, message = "company_name is too long")
    )]
    pub company_name: String,
    /// Founding year.
    #[validate(range(min = 1000, max = 9999, message = "founded_year must be a four-digit year"))]
    pub founded_year: i32,
    /// Headquarters location.
    #[validate(
        custom(function = "non_blank", message = "location is required"),
        length(max = 200, message = "location is too long")
    )]
    pub location: String,
}
