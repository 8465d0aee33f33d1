//! Database migration management commands.

use anyhow::Context;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use jobboard_core::config::AppConfig;
use jobboard_database::migration;

use crate::output::{self, OutputFormat};

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
    /// List the migrations embedded in this binary
    List,
}

#[derive(Debug, Serialize, Tabled)]
struct MigrationRow {
    version: i64,
    description: String,
}

/// Execute migration commands
pub async fn execute(
    args: &MigrateArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match &args.command {
        MigrateCommand::Run => {
            let pool = super::connect(config).await?;
            println!("Running database migrations...");
            migration::run_migrations(pool.pool())
                .await
                .context("Migration failed")?;
            pool.close().await;
            output::print_success("All migrations applied successfully.");
        }
        MigrateCommand::List => {
            let rows: Vec<MigrationRow> = migration::embedded_migrations()
                .into_iter()
                .map(|(version, description)| MigrationRow {
                    version,
                    description,
                })
                .collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
