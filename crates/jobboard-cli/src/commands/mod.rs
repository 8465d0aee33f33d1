//! CLI command definitions and dispatch.

pub mod company;
pub mod migrate;
pub mod token;
pub mod user;

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use jobboard_core::config::AppConfig;
use jobboard_database::{DatabasePool, EntityStore, PgEntityStore};

use crate::output::OutputFormat;

/// Job board administration
#[derive(Debug, Parser)]
#[command(name = "jobboard", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file, without extension
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay (`config/{env}.toml`)
    #[arg(short, long, env = "JOBBOARD_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// User management
    User(user::UserArgs),
    /// Company inspection
    Company(company::CompanyArgs),
    /// Bearer token tooling
    Token(token::TokenArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> anyhow::Result<()> {
        let config = self.load_config()?;
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &config, self.format).await,
            Commands::User(args) => user::execute(args, &config, self.format).await,
            Commands::Company(args) => company::execute(args, &config, self.format).await,
            Commands::Token(args) => token::execute(args, &config, self.format).await,
        }
    }

    fn load_config(&self) -> anyhow::Result<AppConfig> {
        AppConfig::load_from(&self.config, &self.env)
            .with_context(|| format!("Failed to load config from '{}'", self.config))
    }
}

/// Helper: connect to PostgreSQL
pub async fn connect(config: &AppConfig) -> anyhow::Result<DatabasePool> {
    DatabasePool::connect(&config.database)
        .await
        .context("Failed to connect to the database")
}

/// Helper: entity store over PostgreSQL
pub async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn EntityStore>> {
    let pool = connect(config).await?;
    Ok(Arc::new(PgEntityStore::new(&pool)))
}
