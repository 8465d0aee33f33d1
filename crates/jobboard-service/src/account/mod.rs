//! Signup and login.

pub mod service;

pub use service::{AccountService, LoginInput, LoginOutcome, SignupInput};
