//! Email/password verification against the entity store.

use std::sync::Arc;

use tracing::debug;

use jobboard_core::error::AppError;
use jobboard_database::EntityStore;
use jobboard_entity::user::{User, normalize_email};

use crate::password::PasswordHasher;

/// Plaintext hashed once at startup so unknown emails still pay for a
/// full Argon2 verification.
const DUMMY_PASSWORD: &str = "jobboard-dummy-password";

/// Checks presented credentials and returns the matching user.
///
/// Unknown email and wrong password fail with the same
/// `InvalidCredentials` error.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    store: Arc<dyn EntityStore>,
    hasher: PasswordHasher,
    dummy_hash: Option<String>,
}

impl CredentialVerifier {
    /// Creates a verifier over the given store.
    pub fn new(store: Arc<dyn EntityStore>, hasher: PasswordHasher) -> Self {
        let dummy_hash = hasher.hash_password(DUMMY_PASSWORD).ok();
        Self {
            store,
            hasher,
            dummy_hash,
        }
    }

    /// Verifies `password` for the user registered under `email`.
    pub async fn verify(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = normalize_email(email);

        let Some(user) = self.store.find_user_by_email(&email).await? else {
            if let Some(hash) = &self.dummy_hash {
                let _ = self.hasher.verify_password(password, hash);
            }
            debug!("Login attempt for unknown email");
            return Err(AppError::invalid_credentials());
        };

        if self.hasher.verify_password(password, &user.password_hash)? {
            Ok(user)
        } else {
            debug!(user_id = %user.id, "Login attempt with wrong password");
            Err(AppError::invalid_credentials())
        }
    }
}
