//! # jobboard-auth
//!
//! Authentication building blocks for the job board.
//!
//! ## Modules
//!
//! - `jwt`: bearer claim issuing and parsing (HS256)
//! - `password`: Argon2id password hashing and length policy
//! - `credentials`: email/password verification against the entity store

pub mod credentials;
pub mod jwt;
pub mod password;

pub use credentials::CredentialVerifier;
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder, TokenError};
pub use password::{PasswordHasher, PasswordValidator};
