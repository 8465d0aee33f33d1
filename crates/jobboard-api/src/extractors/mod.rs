//! Custom Axum extractors.

pub mod auth;
pub mod json;

pub use auth::{CurrentPrincipal, resolve_principal};
pub use json::{JsonBody, ValidatedJson};
