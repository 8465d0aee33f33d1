//! Bearer token tooling for local testing and support.

use clap::{Args, Subcommand};
use serde::Serialize;

use jobboard_auth::jwt::{JwtDecoder, JwtEncoder};
use jobboard_core::config::AppConfig;
use jobboard_core::types::UserId;

use crate::output::{self, OutputFormat};

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Issue a token for a registered user with the configured secret and TTL
    Issue {
        /// Subject user id
        #[arg(long)]
        user_id: String,
    },
    /// Verify a token and print its claims
    Inspect {
        /// The token to inspect
        token: String,
    },
}

#[derive(Debug, Serialize)]
struct TokenSummary {
    subject: String,
    token_id: String,
    issued_at: String,
    expires_at: String,
    expired: bool,
    remaining_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

/// Execute token commands
pub async fn execute(
    args: &TokenArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match &args.command {
        TokenCommand::Issue { user_id } => {
            let user_id = UserId::parse(user_id)?;
            let store = super::open_store(config).await?;
            if store.find_user(user_id).await?.is_none() {
                anyhow::bail!("No user with id {user_id}");
            }
            let issued = JwtEncoder::new(&config.auth).issue(user_id)?;
            output::print_record(&summary(&issued.claims, Some(issued.token.clone())), format);
        }
        TokenCommand::Inspect { token } => {
            let claims = JwtDecoder::new(&config.auth).parse(token)?;
            output::print_record(&summary(&claims, None), format);
        }
    }
    Ok(())
}

fn summary(claims: &jobboard_auth::Claims, token: Option<String>) -> TokenSummary {
    let fmt = |ts: Option<chrono::DateTime<chrono::Utc>>| {
        ts.map(|t| t.to_rfc3339()).unwrap_or_default()
    };
    TokenSummary {
        subject: claims.user_id().to_string(),
        token_id: claims.jti.to_string(),
        issued_at: fmt(claims.issued_at()),
        expires_at: fmt(claims.expires_at()),
        expired: claims.is_expired(),
        remaining_seconds: claims.remaining_ttl_seconds(),
        token,
    }
}
