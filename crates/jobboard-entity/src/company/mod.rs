//! Company domain entities.

pub mod model;

pub use model::{Company, NewCompany};
