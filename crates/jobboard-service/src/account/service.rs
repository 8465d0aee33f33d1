//! Account creation and credential exchange.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use jobboard_auth::credentials::CredentialVerifier;
use jobboard_auth::jwt::JwtEncoder;
use jobboard_auth::password::{PasswordHasher, PasswordValidator};
use jobboard_core::error::AppError;
use jobboard_core::types::UserId;
use jobboard_database::EntityStore;
use jobboard_entity::user::{NewUser, User};
use jobboard_entity::validation::{non_blank, validate_input};

/// Signup payload. Missing fields deserialize as empty and fail validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SignupInput {
    /// Display name.
    #[validate(
        custom(function = "non_blank", message = "name is required"),
        length(max = 200, message = "name is too long")
    )]
    pub name: String,
    /// Email address.
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// Plaintext password. Policy is checked by [`PasswordValidator`].
    pub password: String,
}

/// Login payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoginInput {
    /// Email address.
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    /// Bearer token to present on later requests.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user_id: UserId,
}

/// Handles signup and login.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// Entity store.
    store: Arc<dyn EntityStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
    /// Credential check for login.
    verifier: Arc<CredentialVerifier>,
    /// Token issuer.
    encoder: Arc<JwtEncoder>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        store: Arc<dyn EntityStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        verifier: Arc<CredentialVerifier>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            store,
            hasher,
            validator,
            verifier,
            encoder,
        }
    }

    /// Registers a new user.
    pub async fn signup(&self, input: SignupInput) -> Result<User, AppError> {
        validate_input(&input)?;
        self.validator.validate(&input.password)?;

        let password_hash = self.hasher.hash_password(&input.password)?;
        let user = self
            .store
            .create_user(NewUser::new(input.name, &input.email, password_hash))
            .await?;

        info!(user_id = %user.id, "User signed up");
        Ok(user)
    }

    /// Exchanges email and password for a bearer token.
    pub async fn login(&self, input: LoginInput) -> Result<LoginOutcome, AppError> {
        validate_input(&input)?;

        let user = self.verifier.verify(&input.email, &input.password).await?;
        let issued = self.encoder.issue(user.id)?;

        info!(user_id = %user.id, jti = %issued.claims.jti, "User logged in");

        Ok(LoginOutcome {
            expires_at: issued.expires_at(),
            token: issued.token,
            user_id: user.id,
        })
    }
}
