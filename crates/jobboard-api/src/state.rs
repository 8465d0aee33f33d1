//! Application state shared across all handlers and resolvers.

use std::sync::Arc;

use jobboard_auth::credentials::CredentialVerifier;
use jobboard_auth::jwt::{JwtDecoder, JwtEncoder};
use jobboard_auth::password::{PasswordHasher, PasswordValidator};
use jobboard_core::config::AppConfig;
use jobboard_database::EntityStore;
use jobboard_service::{AccountService, BoardService};

use crate::graphql::{BoardSchema, build_schema};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Entity store (PostgreSQL or in-memory)
    pub store: Arc<dyn EntityStore>,
    /// Bearer token issuer
    pub jwt_encoder: Arc<JwtEncoder>,
    /// Bearer token parser
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Signup and login
    pub accounts: Arc<AccountService>,
    /// Ownership-scoped company and job operations
    pub board: Arc<BoardService>,
    /// GraphQL schema
    pub schema: BoardSchema,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store.backend())
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Wires the auth components and services over `store`.
    ///
    /// The signing key is read from `config.auth` here, once.
    pub fn build(config: AppConfig, store: Arc<dyn EntityStore>) -> Self {
        let hasher = PasswordHasher::new();
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let verifier = Arc::new(CredentialVerifier::new(
            Arc::clone(&store),
            hasher.clone(),
        ));

        let accounts = Arc::new(AccountService::new(
            Arc::clone(&store),
            Arc::new(hasher),
            Arc::new(PasswordValidator::new(&config.auth)),
            verifier,
            Arc::clone(&jwt_encoder),
        ));
        let board = Arc::new(BoardService::new(Arc::clone(&store)));
        let schema = build_schema(Arc::clone(&board));

        Self {
            config: Arc::new(config),
            store,
            jwt_encoder,
            jwt_decoder,
            accounts,
            board,
            schema,
        }
    }
}
