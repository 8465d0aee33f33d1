//! User management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use jobboard_auth::credentials::CredentialVerifier;
use jobboard_auth::jwt::JwtEncoder;
use jobboard_auth::password::{PasswordHasher, PasswordValidator};
use jobboard_core::config::AppConfig;
use jobboard_service::{AccountService, SignupInput};

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Register a user, applying the same rules as `POST /signup`
    Create {
        /// Display name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Password
        #[arg(long)]
        password: String,
    },
    /// List all users
    List,
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Name
    name: String,
    /// Email
    email: String,
    /// Created at
    created_at: String,
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let store = super::open_store(config).await?;

    match &args.command {
        UserCommand::Create {
            name,
            email,
            password,
        } => {
            let hasher = PasswordHasher::new();
            let accounts = AccountService::new(
                Arc::clone(&store),
                Arc::new(hasher.clone()),
                Arc::new(PasswordValidator::new(&config.auth)),
                Arc::new(CredentialVerifier::new(Arc::clone(&store), hasher)),
                Arc::new(JwtEncoder::new(&config.auth)),
            );

            let user = accounts
                .signup(SignupInput {
                    name: name.clone(),
                    email: email.clone(),
                    password: password.clone(),
                })
                .await?;

            output::print_success(&format!("User '{}' created", user.email));
            output::print_record(&user, format);
        }
        UserCommand::List => {
            let rows: Vec<UserRow> = store
                .list_users()
                .await?
                .into_iter()
                .map(|u| UserRow {
                    id: u.id.to_string(),
                    name: u.name,
                    email: u.email,
                    created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
    }

    Ok(())
}
