//! CLI administration tool for tinylink.
//!
//! Manages short links directly against the database, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List the ten newest links
//! cargo run --bin admin -- list --limit 10
//!
//! # Create a link with a custom code
//! cargo run --bin admin -- create https://example.com --code promo
//!
//! # Delete a link
//! cargo run --bin admin -- delete promo
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server; see [`tinylink::config`].

use tinylink::config;
use tinylink::domain::entities::{BaseUrl, UrlRecord};
use tinylink::infrastructure::persistence::{SqliteUrlRepository, database};
use tinylink::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
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
    /// List short links, newest first
    List {
        /// Show at most this many links
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show a single link with its click statistics
    Show {
        /// Short code
        code: String,
    },

    /// Create a short link
    Create {
        /// Target URL
        url: String,

        /// Custom short code (random if omitted)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Delete a short link
    Delete {
        /// Short code
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show totals
    Stats,

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

    let pool = database::connect(&config.database_url, &config.pool_settings())
        .await
        .context("Failed to connect to database")?;
    database::migrate(&pool)
        .await
        .context("Failed to run migrations")?;

    let state = AppState::build(
        Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone()))),
        BaseUrl::new(config.base_url.clone()),
        config.allocator_policy(),
    );

    let result = match cli.command {
        Commands::List { limit } => list_links(&state, limit).await,
        Commands::Show { code } => show_link(&state, &code).await,
        Commands::Create { url, code } => create_link(&state, url, code).await,
        Commands::Delete { code, yes } => delete_link(&state, &code, yes).await,
        Commands::Stats => handle_stats(&pool).await,
        Commands::Db { action } => handle_db_action(action, &pool).await,
    };

    pool.close().await;
    result
}

/// Lists links in a table.
///
/// # Output Format
///
/// ```text
/// 📋 Short Links
///
///   Code       Clicks  Created           Target
///   ──────────────────────────────────────────────────────────────────────────
///   abc        3       2025-01-15 10:30  https://example.com
/// ```
async fn list_links(state: &AppState, limit: Option<usize>) -> Result<()> {
    println!("{}", "📋 Short Links".bright_blue().bold());
    println!();

    let links = state
        .link_service
        .list_links(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin create <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<10} {:<7} {:<17} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<10} {:<7} {:<17} {}",
            link.short_code.cyan(),
            link.clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Prints one link with its statistics.
async fn show_link(state: &AppState, code: &str) -> Result<()> {
    let link = state
        .link_service
        .get_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_link(state, &link);
    Ok(())
}

/// Allocates a new link through the same service the API uses.
async fn create_link(state: &AppState, url: String, code: Option<String>) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let link = state
        .allocator
        .allocate(url, code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    print_link(state, &link.record);

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(state: &AppState, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Short Link".bright_blue().bold());
    println!();

    let link = state
        .link_service
        .get_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_link(state, &link);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = state
        .link_service
        .delete_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    if deleted {
        println!("{}", "✅ Link deleted".green().bold());
    } else {
        println!("{}", "⚠️  Link was already removed".yellow());
    }
    println!();

    Ok(())
}

fn print_link(state: &AppState, link: &UrlRecord) {
    let last_accessed = link
        .last_accessed
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    println!("  Code:          {}", link.short_code.cyan());
    println!(
        "  Short URL:     {}",
        state.link_service.short_url(&link.short_code).bright_yellow()
    );
    println!("  Target:        {}", link.original_url);
    println!("  Clicks:        {}", link.clicks.to_string().bright_green());
    println!(
        "  Created:       {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
    );
    println!("  Last accessed: {}", last_accessed);
    println!();
}

/// Displays totals across all links.
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await?;

    let clicks_count: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(clicks), 0) FROM urls")
        .fetch_one(pool)
        .await?;

    let never_visited: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE last_accessed IS NULL")
            .fetch_one(pool)
            .await?;

    println!(
        "  Links:         {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:        {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!(
        "  Never visited: {}",
        never_visited.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("  SQLite: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
