//! # jobboard-service
//!
//! Business logic for the job board. [`AccountService`] handles signup and
//! login; [`BoardService`] enforces that callers only see and extend the
//! companies they own. Both REST and GraphQL call into these services, so
//! the ownership rules live here and nowhere else.
//!
//! Services follow constructor injection: all dependencies are provided at
//! construction time via `Arc` references.

pub mod account;
pub mod board;
pub mod context;

pub use account::{AccountService, LoginInput, LoginOutcome, SignupInput};
pub use board::BoardService;
pub use context::{AnonymousReason, Principal, RequestContext};
