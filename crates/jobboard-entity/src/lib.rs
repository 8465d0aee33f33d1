//! # jobboard-entity
//!
//! Domain entity models for the job board. Every struct in this crate
//! represents a database table row or a client-supplied input. Persisted
//! entities derive `sqlx::FromRow`; inputs derive `validator::Validate` so
//! that the REST and GraphQL adapters apply the same rules.

pub mod company;
pub mod job;
pub mod user;
pub mod validation;

pub use company::{Company, NewCompany};
pub use job::{Job, NewJob};
pub use user::{NewUser, User};
