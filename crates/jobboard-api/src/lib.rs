//! # jobboard-api
//!
//! HTTP API layer for the job board built on Axum.
//!
//! Serves the REST routes and the GraphQL endpoint side by side. Both
//! surfaces resolve the caller the same way and delegate every ownership
//! decision to `jobboard-service`.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod graphql;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
