//! CLI administration tool for short-to-me.
//!
//! Drives the shortening service directly against the database,
//! without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/some/long/path
//!
//! # Resolve a short URL (full URL or bare id)
//! cargo run --bin admin -- resolve http://localhost:8081/3Xk9a0b
//!
//! # Show the redirect count
//! cargo run --bin admin -- count 3Xk9a0b
//!
//! # Delete a record
//! cargo run --bin admin -- delete 3Xk9a0b --yes
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components: PostgreSQL connection
//! - `BASE_URL` (optional): prefix used when printing new short URLs

use short_to_me::application::services::ShortenerService;
use short_to_me::config;
use short_to_me::infrastructure::persistence::PgShortUrlRepository;
use short_to_me::server::connect_pool;
use short_to_me::utils::id_generator::TimestampIdGenerator;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing short-to-me.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL (returns the existing id if already stored)
    Shorten {
        /// Long URL, stored exactly as given
        url: String,
    },

    /// Print the original URL behind a short URL
    Resolve {
        /// Short URL or bare id
        short_url: String,
    },

    /// Print the redirect count of a short URL
    Count {
        /// Short URL or bare id
        short_url: String,
    },

    /// Delete a short URL
    Delete {
        /// Short URL or bare id
        short_url: String,

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

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    let service = build_service(&pool);

    match cli.command {
        Commands::Shorten { url } => shorten(&service, &url, config.base_url.as_deref()).await?,
        Commands::Resolve { short_url } => resolve(&service, &short_url).await?,
        Commands::Count { short_url } => count(&service, &short_url).await?,
        Commands::Delete { short_url, yes } => delete_link(&service, short_url, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn build_service(pool: &PgPool) -> ShortenerService {
    ShortenerService::new(
        Arc::new(PgShortUrlRepository::new(Arc::new(pool.clone()))),
        Arc::new(TimestampIdGenerator::new()),
    )
}

async fn shorten(service: &ShortenerService, url: &str, base_url: Option<&str>) -> Result<()> {
    let id = service
        .shorten_url(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "✅ Shortened".green().bold());
    println!("  URL: {}", url.cyan());
    println!("  ID:  {}", id.bright_yellow().bold());
    if let Some(base) = base_url {
        println!("  Short URL: {}", format!("{base}/{id}").bright_white());
    }

    Ok(())
}

async fn resolve(service: &ShortenerService, short_url: &str) -> Result<()> {
    let url = service
        .retrieve_url(short_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve {}: {}", short_url, e))?;

    println!("{}", url.cyan());
    Ok(())
}

async fn count(service: &ShortenerService, short_url: &str) -> Result<()> {
    let count = service
        .count_redirects(short_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count {}: {}", short_url, e))?;

    println!(
        "  Redirects: {}",
        count.to_string().bright_green().bold()
    );
    Ok(())
}

/// Deletes a record after showing what it points to.
///
/// Requires confirmation (default: No) unless `--yes` is given.
async fn delete_link(service: &ShortenerService, short_url: String, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete short URL".bright_blue().bold());
    println!();

    let url = service
        .retrieve_url(&short_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve {}: {}", short_url, e))?;

    println!("  Short URL: {}", short_url.bright_yellow());
    println!("  Target:    {}", url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this short URL?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_url(&short_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete {}: {}", short_url, e))?;

    println!("{}", "✅ Deleted".green().bold());
    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let records: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_urls")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!(
                "  Short URLs: {}",
                records.to_string().bright_white().bold()
            );
        }
    }

    Ok(())
}
