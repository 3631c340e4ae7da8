//! CLI administration tool for tinylink.
//!
//! Works directly against the PostgreSQL link store, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts for it when omitted)
//! cargo run --bin admin -- shorten https://example.com
//!
//! # Look up where a code points
//! cargo run --bin admin -- resolve Ab3xYz
//!
//! # Check the database connection
//! cargo run --bin admin -- db check
//!
//! # Apply migrations
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server: `DATABASE_URL`, or the `DB_*`
//! components, plus `BASE_URL` for printed short links.

use tinylink::application::services::LinkService;
use tinylink::config::{Config, mask_connection_string};
use tinylink::domain::repositories::LinkStore;
use tinylink::error::AppError;
use tinylink::infrastructure::persistence::PgLinkStore;
use tinylink::server::{connect_pool, run_migrations};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tinylink.
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
    /// Create a short link
    Shorten {
        /// URL to shorten (prompted for when omitted)
        url: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the URL a short code redirects to
    Resolve {
        /// Short code
        code: String,
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

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?.into_postgres()?;

    let pool = connect_pool(&config)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Shorten { url, yes } => shorten(&config, &pool, url, yes).await?,
        Commands::Resolve { code } => resolve(&config, &pool, &code).await?,
        Commands::Db { action } => handle_db_action(&config, action, &pool).await?,
    }

    Ok(())
}

fn link_service(config: &Config, pool: &PgPool) -> LinkService {
    let store: Arc<dyn LinkStore> = Arc::new(PgLinkStore::new(Arc::new(pool.clone())));
    LinkService::new(store, config.base_url.clone())
}

/// Creates a short link, asking for the URL interactively when needed.
async fn shorten(
    config: &Config,
    pool: &PgPool,
    url: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create short link".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("URL").interact_text()?,
    };

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Shorten {}?", url))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let service = link_service(config, pool);
    let link = service
        .shorten(&url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!();
    println!("{}", "Short link created".green().bold());
    println!("  Code:      {}", link.code.bright_yellow().bold());
    println!("  Original:  {}", link.target_url.cyan());
    println!("  Short URL: {}", service.short_url(&link.code).bright_cyan());

    Ok(())
}

/// Prints the target of a short code.
async fn resolve(config: &Config, pool: &PgPool, code: &str) -> Result<()> {
    let service = link_service(config, pool);

    match service.resolve(code).await {
        Ok(target) => {
            println!("{} -> {}", code.bright_yellow(), target.cyan());
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("No link found for code '{}'", code).red());
        }
        Err(e) => return Err(anyhow::anyhow!("Lookup failed: {}", e)),
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(config: &Config, action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            let target = config
                .database_url
                .as_deref()
                .map(mask_connection_string)
                .unwrap_or_default();
            println!(
                "{} {}",
                "Checking database connection:".bright_blue(),
                target
            );

            let store = PgLinkStore::new(Arc::new(pool.clone()));
            store
                .health_check()
                .await
                .map_err(|e| anyhow::anyhow!("Health check failed: {}", e))?;

            let links = store
                .count()
                .await
                .context("Failed to count links")?;

            println!("{}", "Database connection OK".green().bold());
            println!("  Stored links: {}", links.to_string().bright_white());
        }
        DbAction::Migrate => {
            run_migrations(pool).await?;
            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
