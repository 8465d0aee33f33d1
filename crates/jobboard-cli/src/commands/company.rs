//! Operator view of companies. Reads the store directly, so it is not
//! limited to one owner.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use jobboard_core::config::AppConfig;
use jobboard_core::types::UserId;

use crate::output::{self, OutputFormat};

/// Arguments for company commands
#[derive(Debug, Args)]
pub struct CompanyArgs {
    /// Company subcommand
    #[command(subcommand)]
    pub command: CompanyCommand,
}

/// Company subcommands
#[derive(Debug, Subcommand)]
pub enum CompanyCommand {
    /// List companies, optionally for a single owner
    List {
        /// Only companies owned by this user id
        #[arg(long)]
        owner: Option<String>,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct CompanyRow {
    id: String,
    company_name: String,
    founded_year: i32,
    location: String,
    owner_id: String,
}

/// Execute company commands
pub async fn execute(
    args: &CompanyArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let store = super::open_store(config).await?;

    match &args.command {
        CompanyCommand::List { owner } => {
            let companies = match owner {
                Some(owner) => {
                    let owner_id = UserId::parse(owner)?;
                    store.list_companies_by_owner(owner_id).await?
                }
                None => store.list_companies().await?,
            };

            let rows: Vec<CompanyRow> = companies
                .into_iter()
                .map(|c| CompanyRow {
                    id: c.id.to_string(),
                    company_name: c.company_name,
                    founded_year: c.founded_year,
                    location: c.location,
                    owner_id: c.owner_id.to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
    }

    Ok(())
}
