//! Password policy enforcement for signup.

use jobboard_core::config::AuthConfig;
use jobboard_core::error::AppError;

/// Validates new passwords against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length in characters.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Returns `Ok(())` if the password meets the policy.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.is_empty() {
            return Err(AppError::validation("password: password is required"));
        }

        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "password: must be at least {} characters long",
                self.min_length
            )));
        }

        Ok(())
    }
}
