// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing) and parse command-line arguments (clap)
// 2. Dispatch to the appropriate subcommand handler
// 3. Print results as a table or JSON
// 4. Exit with proper code (0 = success, 1 = some topics failed, 2 = error)
//
// Progress goes to stderr through tracing; tables and JSON go to stdout.
// =============================================================================

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use topic_scraper::cli::{Cli, Commands};
use topic_scraper::crawl::Paginator;
use topic_scraper::fetch::HttpFetcher;
use topic_scraper::scrape::{self, RunReport, TopicStatus};
use topic_scraper::{Config, Topic};

#[tokio::main]
async fn main() {
    // RUST_LOG overrides the default "info" level, e.g. RUST_LOG=debug
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = everything worked
//   Ok(1) = at least one topic failed
//   Err   = fatal error (exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = cli.to_config().context("Invalid configuration")?;

    match cli.command {
        Commands::Scrape { json } => handle_scrape(&config, json).await,
        Commands::Topics { json } => handle_topics(&config, json).await,
        Commands::Pages => handle_pages(&config).await,
        Commands::Selectors => {
            println!("{}", serde_json::to_string_pretty(&config.selectors)?);
            Ok(0)
        }
    }
}

async fn handle_scrape(config: &Config, json: bool) -> Result<i32> {
    let fetcher = HttpFetcher::new(config.timeout)?;
    let report = scrape::scrape_topics_repos(&fetcher, config)
        .await
        .context("Failed to scrape the topics listing")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.failures().is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}

async fn handle_topics(config: &Config, json: bool) -> Result<i32> {
    let fetcher = HttpFetcher::new(config.timeout)?;
    let listing = Paginator::new(&fetcher, config)
        .collect_topics()
        .await
        .context("Failed to read the topics listing")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&listing.topics)?);
    } else {
        print_topics(&listing.topics);
        println!("\n📄 {} topic(s) on {} page(s)", listing.topics.len(), listing.pages);
    }
    Ok(0)
}

async fn handle_pages(config: &Config) -> Result<i32> {
    let fetcher = HttpFetcher::new(config.timeout)?;
    let pages = Paginator::new(&fetcher, config)
        .discover_page_count()
        .await
        .context("Failed to probe the topics listing")?;

    println!("{}", pages);
    Ok(0)
}

// Prints the topics as a human-readable table
fn print_topics(topics: &[Topic]) {
    println!("{:<5} {:<30} {:<50}", "#", "TITLE", "URL");
    println!("{}", "=".repeat(85));

    for (i, topic) in topics.iter().enumerate() {
        // Index starts from 1, like the listing itself
        println!("{:<5} {:<30} {:<50}", i + 1, truncate(&topic.title, 30), topic.url);
    }
}

// Prints the per-topic results and a summary
fn print_report(report: &RunReport) {
    println!("{:<30} {:<15} {:<50}", "TOPIC", "STATUS", "DETAILS");
    println!("{}", "=".repeat(95));

    for result in &report.results {
        let (status, details) = match &result.status {
            TopicStatus::Written { rows } => ("✅ WRITTEN", format!("{} repos -> {}", rows, result.path.display())),
            TopicStatus::Skipped => ("⏭️  SKIPPED", format!("{} exists", result.path.display())),
            TopicStatus::Failed { error } => ("❌ FAILED", error.clone()),
        };
        println!("{:<30} {:<15} {:<50}", truncate(&result.title, 30), status, details);
    }

    println!();
    println!("📊 Summary:");
    println!("   📄 Pages: {}", report.pages);
    println!("   ✅ Written: {}", report.written());
    println!("   ⏭️  Skipped: {}", report.skipped());
    println!("   ❌ Failed: {}", report.failures().len());
    println!("   📋 Total: {}", report.results.len());
}

// Truncates text to fit a table column
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let cut: String = text.chars().take(width - 3).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
