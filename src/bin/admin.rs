//! CLI administration tool for slugshort.
//!
//! Inspects and edits short links directly in the configured store, without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Look up a short code
//! cargo run --bin admin -- resolve ghub
//!
//! # Shorten a URL with the full policy (generator if configured)
//! cargo run --bin admin -- shorten github.com
//!
//! # Show the hash-based code for a URL without touching the store
//! cargo run --bin admin -- hash example.com
//!
//! # Delete a mapping
//! cargo run --bin admin -- delete ghub
//!
//! # Check store connection
//! cargo run --bin admin -- ping
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `slugshort::config`). `STORAGE_BACKEND=memory`
//! works but every invocation then starts from an empty store.

use slugshort::application::services::ShortenerService;
use slugshort::config::{self, Config};
use slugshort::domain::entities::SlugType;
use slugshort::domain::repositories::UrlStore;
use slugshort::server::{build_generator, connect_store};
use slugshort::utils::hasher::short_hash;
use slugshort::utils::url_validator::normalize;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing slugshort.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the original URL for a short code
    Resolve {
        /// Short code to look up
        code: String,
    },

    /// Shorten a URL and store the mapping
    Shorten {
        /// URL to shorten (scheme optional)
        url: String,
    },

    /// Print the hash-based code for a URL (store is not touched)
    Hash {
        /// URL to hash (scheme optional)
        url: String,
    },

    /// Delete a short code mapping
    Delete {
        /// Short code to delete
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check store connection
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // `hash` is pure and must work without a reachable store.
    if let Commands::Hash { url } = &cli.command {
        return hash_url(url);
    }

    let config = config::load_from_env().context("Invalid configuration")?;
    let store = connect_store(&config)
        .await
        .context("Failed to connect to store")?;

    let result = match cli.command {
        Commands::Resolve { code } => resolve(&config, store.clone(), &code).await,
        Commands::Shorten { url } => shorten(&config, store.clone(), &url).await,
        Commands::Delete { code, yes } => delete(store.as_ref(), &code, yes).await,
        Commands::Ping => ping(store.as_ref()).await,
        Commands::Hash { .. } => Ok(()),
    };

    store.close().await.ok();
    result
}

fn shortener(
    config: &Config,
    store: Arc<dyn UrlStore>,
    with_generator: bool,
) -> Result<ShortenerService> {
    let generator = if with_generator {
        build_generator(config)?
    } else {
        None
    };

    Ok(ShortenerService::new(
        store,
        generator,
        config.shortener_settings(),
    ))
}

/// Looks up a short code through the same path the redirect handler uses.
async fn resolve(config: &Config, store: Arc<dyn UrlStore>, code: &str) -> Result<()> {
    println!("{}", "🔎 Resolve".bright_blue().bold());
    println!();

    let service = shortener(config, store, false)?;

    match service.resolve(code).await {
        Ok(url) => {
            println!("  {} → {}", service.short_url(code).cyan(), url.bright_white());
        }
        Err(slugshort::AppError::NotFound { .. }) => {
            println!("  {}", format!("'{code}' not found (unknown or expired)").yellow());
        }
        Err(e) => return Err(anyhow::anyhow!("Lookup failed: {}", e)),
    }

    println!();
    Ok(())
}

/// Runs the full shortening policy.
async fn shorten(config: &Config, store: Arc<dyn UrlStore>, url: &str) -> Result<()> {
    println!("{}", "✂️  Shorten".bright_blue().bold());
    println!();

    let service = shortener(config, store, true)?;
    if !service.is_generator_enabled() {
        println!("{}", "  Slug generator disabled, using hash".bright_black());
    }

    let result = service
        .create_short_url(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    let kind = match result.slug_type {
        SlugType::GeneratorDerived => result.slug_type.as_str().green(),
        SlugType::HashBased => result.slug_type.as_str().yellow(),
    };

    println!("  Original:  {}", result.original_url.bright_white());
    println!("  Short URL: {}", result.short_url.cyan().bold());
    println!("  Code:      {} ({})", result.short_code.bright_yellow(), kind);
    println!();

    Ok(())
}

fn hash_url(url: &str) -> Result<()> {
    let normalized = normalize(url).map_err(|e| anyhow::anyhow!("Invalid URL: {}", e))?;

    println!("  Normalized: {}", normalized.bright_white());
    println!("  Code:       {}", short_hash(&normalized).bright_yellow().bold());

    Ok(())
}

/// Deletes a mapping with confirmation prompt (default: No).
async fn delete(store: &dyn UrlStore, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Short Link".bright_blue().bold());
    println!();

    let Some(url) = store
        .get(code)
        .await
        .map_err(|e| anyhow::anyhow!("Store error: {}", e))?
    else {
        println!("{}", format!("⚠️  '{code}' does not exist").yellow());
        return Ok(());
    };

    println!("  Code: {}", code.cyan());
    println!("  URL:  {}", url.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let removed = store
        .delete(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete mapping: {}", e))?;

    if removed {
        println!("{}", "✅ Mapping deleted".green().bold());
    } else {
        println!("{}", "⚠️  Mapping expired before it could be deleted".yellow());
    }
    println!();

    Ok(())
}

async fn ping(store: &dyn UrlStore) -> Result<()> {
    println!("{}", "🔌 Checking store connection...".bright_blue());

    if store.ping().await {
        println!("{}", format!("✅ {} is reachable", store.backend()).green().bold());
        Ok(())
    } else {
        anyhow::bail!("{} did not answer PING", store.backend())
    }
}
