//! CLI administration tool for alias-shortener.
//!
//! Saves, resolves and deletes mappings and inspects the database without
//! going through the HTTP API. Uses the same configuration, store and alias
//! service as the server.
//!
//! # Usage
//!
//! ```bash
//! # Store a mapping under a generated alias
//! cargo run --bin admin -- save https://example.com/a/b
//!
//! # Store a mapping under a chosen alias
//! cargo run --bin admin -- save https://example.com/a/b --alias ex1
//!
//! # Look up an alias
//! cargo run --bin admin -- resolve ex1
//!
//! # Delete an alias
//! cargo run --bin admin -- delete ex1
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL`, `STORAGE_PATH` or `DB_*`.

use alias_shortener::application::services::AliasService;
use alias_shortener::config;
use alias_shortener::domain::repositories::MappingRepository;
use alias_shortener::infrastructure::persistence::MappingStore;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Store a mapping
    Save {
        /// Target URL
        url: String,

        /// Alias to use (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Print the target URL of an alias
    Resolve {
        /// Alias to look up
        alias: String,
    },

    /// Delete a mapping
    Delete {
        /// Alias to delete
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let store = Arc::new(MappingStore::connect(&config.storage).await?);
    let service = AliasService::with_max_attempts(store.clone(), config.alias_max_attempts);

    let result = match cli.command {
        Commands::Save { url, alias } => save(&service, url, alias).await,
        Commands::Resolve { alias } => resolve(&service, &alias).await,
        Commands::Delete { alias, yes } => delete(&service, &alias, yes).await,
        Commands::Db { action } => handle_db_action(action, &store).await,
    };

    store.close().await;
    result
}

async fn save(
    service: &AliasService<MappingStore>,
    url: String,
    alias: Option<String>,
) -> Result<()> {
    let mapping = service
        .save_mapping(url, alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to save mapping: {}", e))?;

    println!("{}", "Mapping saved".green().bold());
    println!("  ID:    {}", mapping.id.to_string().bright_black());
    println!("  Alias: {}", mapping.alias.bright_yellow().bold());
    println!("  URL:   {}", mapping.url.cyan());

    Ok(())
}

async fn resolve(service: &AliasService<MappingStore>, alias: &str) -> Result<()> {
    let url = service
        .resolve_alias(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve alias: {}", e))?;

    println!("{}", url);

    Ok(())
}

/// Deletes a mapping, asking for confirmation unless `--yes` is given.
async fn delete(
    service: &AliasService<MappingStore>,
    alias: &str,
    skip_confirm: bool,
) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete alias '{}'?", alias))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_mapping(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete mapping: {}", e))?;

    println!("{}", "Mapping deleted".green().bold());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, store: &MappingStore) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            store
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let (version, mappings): (String, i64) = match store {
                MappingStore::Embedded(repo) => (
                    sqlx::query_scalar("SELECT 'SQLite ' || sqlite_version()")
                        .fetch_one(repo.pool())
                        .await?,
                    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
                        .fetch_one(repo.pool())
                        .await?,
                ),
                MappingStore::Pooled(repo) => (
                    sqlx::query_scalar("SELECT version()")
                        .fetch_one(repo.pool())
                        .await?,
                    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
                        .fetch_one(repo.pool())
                        .await?,
                ),
            };

            println!("  Engine:   {}", store.engine().as_str().bright_white());
            println!("  Version:  {}", version.bright_white());
            println!(
                "  Mappings: {}",
                mappings.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
