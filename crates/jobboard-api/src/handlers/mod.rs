//! REST route handlers organized by domain.

pub mod auth;
pub mod company;
pub mod health;
pub mod job;
