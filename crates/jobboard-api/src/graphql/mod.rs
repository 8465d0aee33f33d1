//! GraphQL surface over the board service.
//!
//! Resolvers parse identifiers, validate inputs, and hand everything else
//! to [`BoardService`](jobboard_service::BoardService). Errors carry the
//! same `code` extension as the REST error body.

pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

pub use schema::{BoardSchema, build_schema, graphql_handler, graphql_playground};
