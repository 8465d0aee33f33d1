//! # jobboard-database
//!
//! PostgreSQL connection management, repositories for users, companies and
//! jobs, and the [`EntityStore`] capability with its PostgreSQL and
//! in-memory implementations.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{EntityStore, MemoryStore, PgEntityStore};
