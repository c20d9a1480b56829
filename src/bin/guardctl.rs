//! Command-line companion for dpa-guard.
//!
//! Runs the same status pipeline as the server against the configured store,
//! without starting the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check a site or app link
//! cargo run --bin guardctl -- check https://www.khanacademy.org
//!
//! # Configure the dataset source
//! cargo run --bin guardctl -- source set "https://docs.google.com/spreadsheets/d/<id>/export?format=csv"
//! cargo run --bin guardctl -- source form "https://forms.gle/<id>"
//! cargo run --bin guardctl -- source show
//!
//! # Refetch the dataset now
//! cargo run --bin guardctl -- refresh --force
//!
//! # Browse records
//! cargo run --bin guardctl -- records --search kami
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `dpa_guard::config`). Without `REDIS_URL` the
//! state lives only for the duration of one command.

use dpa_guard::application::services::{StatusReply, StatusService};
use dpa_guard::config::{self, Config, mask_query};
use dpa_guard::domain::catalog;
use dpa_guard::domain::entities::{ReferenceRecord, StatusCategory};
use dpa_guard::infrastructure::indicator::IndicatorBoard;
use dpa_guard::server::{build_cache, connect_store};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for dpa-guard.
#[derive(Parser)]
#[command(name = "guardctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the review status of a URL
    Check {
        /// Site or app-store URL
        url: String,
    },

    /// Make sure a current dataset is cached
    Refresh {
        /// Refetch even if the cached dataset is fresh
        #[arg(short, long)]
        force: bool,
    },

    /// Manage the dataset source and review form URLs
    Source {
        #[command(subcommand)]
        action: SourceAction,
    },

    /// List reference records
    Records {
        /// Filter by software or vendor name
        #[arg(short, long)]
        search: Option<String>,

        /// Maximum number of rows to print
        #[arg(short, long, default_value_t = 50)]
        limit: usize,
    },
}

#[derive(Subcommand)]
enum SourceAction {
    /// Save a new source URL (invalidates the cached dataset)
    Set { url: String },

    /// Remove the saved source URL
    Clear,

    /// Set the review-request form URL, or clear it when omitted
    Form { url: Option<String> },

    /// Show the effective source URL and the review form URL
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_from_env().context("Invalid configuration")?;
    let service = build_service(&config).await?;

    match cli.command {
        Commands::Check { url } => check(&service, &url).await,
        Commands::Refresh { force } => refresh(&service, force).await,
        Commands::Source { action } => handle_source_action(&service, action).await,
        Commands::Records { search, limit } => {
            list_records(&service, search.as_deref().unwrap_or_default(), limit).await
        }
    }
}

async fn build_service(config: &Config) -> Result<StatusService> {
    let store = connect_store(config.redis_url.as_deref()).await;
    let cache = build_cache(config, store)?;
    Ok(StatusService::new(
        Arc::new(cache),
        Arc::new(IndicatorBoard::new()),
    ))
}

fn paint(category: StatusCategory) -> ColoredString {
    let label = category.as_str().to_uppercase();
    match category {
        StatusCategory::Approved => label.green().bold(),
        StatusCategory::Denied => label.red().bold(),
        StatusCategory::StaffOnly => label.yellow().bold(),
        StatusCategory::Pending => label.bright_blue().bold(),
        StatusCategory::Unlisted | StatusCategory::Default => label.bright_black().bold(),
    }
}

async fn check(service: &StatusService, url: &str) -> Result<()> {
    let report = match service.query(url).await {
        StatusReply::Found(report) => report,
        StatusReply::Error(message) => {
            println!("{}", message.red());
            return Ok(());
        }
    };

    println!("{}", "🔎 Status".bright_blue().bold());
    println!();
    println!("  Host:     {}", report.identity.hostname().cyan());
    if let Some(store) = report.identity.app_store() {
        println!("  Store:    {}", store.display_name().cyan());
    }
    if let Some(app_id) = report.identity.app_id() {
        println!("  App ID:   {}", app_id.cyan());
    }
    println!("  Category: {}", paint(report.category));

    if let Some(record) = report.matched_record {
        println!();
        print_record_details(&record);
    }
    if let Some(form) = report.form_url {
        println!("  Request a review: {}", form.cyan());
    }
    println!();

    Ok(())
}

fn print_record_details(record: &ReferenceRecord) {
    let show = |label: &str, value: Option<&str>| {
        println!("  {:<10}{}", label, value.unwrap_or("-").bright_white());
    };
    show("Record:", Some(&record.id));
    show("Software:", record.software_name.as_deref());
    show("Vendor:", record.vendor_name.as_deref());
    show("T&L:", record.current_tl_status.as_deref());
    show("DPA:", record.current_dpa_status.as_deref());
}

async fn refresh(service: &StatusService, force: bool) -> Result<()> {
    let cache = service.cache();
    let dataset = if force {
        cache.refresh().await
    } else {
        cache.get_current().await
    };

    match dataset {
        Some(dataset) => {
            let fetched = dataset
                .fetched_at()
                .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
                .unwrap_or_else(|| "unknown".to_string());
            println!(
                "{} {} records (fetched {})",
                "✅".green(),
                dataset.len().to_string().bright_white().bold(),
                fetched.bright_black()
            );
        }
        None => println!(
            "{}",
            "❌ No dataset available. Check the source URL and logs.".red()
        ),
    }
    Ok(())
}

async fn handle_source_action(service: &StatusService, action: SourceAction) -> Result<()> {
    let cache = service.cache();
    match action {
        SourceAction::Set { url } => {
            url::Url::parse(url.trim()).context("Source must be an absolute URL")?;
            cache
                .configure_source(&url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to save source: {}", e))?;
            println!("{}", "✅ Source saved; cached dataset invalidated".green());
        }
        SourceAction::Clear => {
            cache
                .configure_source("")
                .await
                .map_err(|e| anyhow::anyhow!("Failed to clear source: {}", e))?;
            println!("{}", "✅ Saved source cleared".green());
        }
        SourceAction::Form { url } => {
            let url = url.unwrap_or_default();
            if !url.trim().is_empty() {
                url::Url::parse(url.trim()).context("Form must be an absolute URL")?;
            }
            cache
                .configure_form(&url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to save form: {}", e))?;
            println!("{}", "✅ Review form saved".green());
        }
        SourceAction::Show => {
            match cache.source_url().await {
                Some(url) => println!("  Source: {}", mask_query(&url).cyan()),
                None => println!("{}", "  No source configured".yellow()),
            }
            match cache.form_url().await {
                Some(url) => println!("  Form:   {}", url.cyan()),
                None => println!("{}", "  No review form configured".yellow()),
            }
        }
    }
    Ok(())
}

/// Prints matching records as a table.
///
/// ```text
/// 📋 Reference Records
///
///   ID        Software                       T&L          DPA
///   ─────────────────────────────────────────────────────────────────
///   row-1     Kami                           Approved     Received
/// ```
async fn list_records(service: &StatusService, term: &str, limit: usize) -> Result<()> {
    let Some(dataset) = service.cache().get_current().await else {
        println!("{}", "❌ DPA data not yet loaded.".red());
        return Ok(());
    };

    let records = catalog::search(&dataset.records, term);

    println!("{}", "📋 Reference Records".bright_blue().bold());
    println!();

    if records.is_empty() {
        println!("{}", "  No matching records".yellow());
        return Ok(());
    }

    println!(
        "  {:<10} {:<30} {:<12} {:<12}",
        "ID".bright_white().bold(),
        "Software".bright_white().bold(),
        "T&L".bright_white().bold(),
        "DPA".bright_white().bold()
    );
    println!("  {}", "─".repeat(65).bright_black());

    for record in records.iter().take(limit) {
        println!(
            "  {:<10} {:<30} {:<12} {:<12}",
            record.id.bright_black(),
            record.software_name.as_deref().unwrap_or("-").cyan(),
            record.current_tl_status.as_deref().unwrap_or("-"),
            record.current_dpa_status.as_deref().unwrap_or("-"),
        );
    }

    println!();
    println!(
        "  Showing {} of {}",
        records.len().min(limit).to_string().bright_white().bold(),
        records.len()
    );
    println!();

    Ok(())
}
