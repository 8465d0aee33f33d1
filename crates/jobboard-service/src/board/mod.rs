//! Ownership-scoped company and job operations.

pub mod service;

pub use service::BoardService;
