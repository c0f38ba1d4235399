// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Every option can also come from an environment variable (the `env = ...`
// attribute), and `global = true` lets options go before or after the
// subcommand name.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::assemble::CorrelationPolicy;
use crate::config::{self, Config, DEFAULT_BASE_URL, DEFAULT_MAX_PAGES, DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT_SECS};
use crate::error::Result;
use crate::extract::SelectorTable;

#[derive(Parser, Debug)]
#[command(
    name = "topic-scraper",
    version,
    about = "Scrape GitHub topics and their top repositories into CSV files",
    long_about = "topic-scraper reads the GitHub topics listing, then visits each topic and saves its \
                  top repositories (owner, name, stars, url) to one CSV file per topic. \
                  Topics whose CSV file already exists are skipped, so an interrupted run can simply be restarted."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Origin of the site to scrape
    #[arg(long, global = true, env = "TOPIC_SCRAPER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory for the per-topic CSV files (created if missing)
    #[arg(long, global = true, env = "TOPIC_SCRAPER_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Read exactly this many listing pages instead of discovering the count
    #[arg(long, global = true, env = "TOPIC_SCRAPER_PAGES")]
    pub pages: Option<u32>,

    /// Stop page discovery after this many pages
    #[arg(long, global = true, env = "TOPIC_SCRAPER_MAX_PAGES", default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: u32,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "TOPIC_SCRAPER_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Number of topic pages fetched at the same time
    #[arg(long, global = true, env = "TOPIC_SCRAPER_CONCURRENCY", default_value_t = 1)]
    pub concurrency: usize,

    /// What to do when fragment counts on a page don't line up
    #[arg(long, global = true, env = "TOPIC_SCRAPER_ON_MISMATCH", value_enum, default_value_t = CorrelationPolicy::FailFast)]
    pub on_mismatch: CorrelationPolicy,

    /// JSON file overriding the selector table (see the `selectors` command)
    #[arg(long, global = true, env = "TOPIC_SCRAPER_SELECTORS")]
    pub selectors: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scrape every topic's top repositories into CSV files
    ///
    /// Example: topic-scraper scrape --output-dir data
    Scrape {
        /// Print the run report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the topics (title, description, url) without visiting them
    Topics {
        /// Output topics as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Count the pages of the topics listing
    Pages,

    /// Print the selector table in use, as JSON
    ///
    /// Save the output, edit it, and pass it back with --selectors when
    /// the site's markup changes.
    Selectors,
}

impl Cli {
    /// Builds the runtime Config from the parsed arguments
    pub fn to_config(&self) -> Result<Config> {
        let selectors = match &self.selectors {
            Some(path) => SelectorTable::load(path)?,
            None => SelectorTable::default(),
        };

        Ok(Config {
            base_url: config::parse_base_url(&self.base_url)?,
            output_dir: self.output_dir.clone(),
            pages: self.pages,
            max_pages: self.max_pages,
            timeout: Duration::from_secs(self.timeout_secs),
            concurrency: self.concurrency.max(1),
            policy: self.on_mismatch,
            selectors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["topic-scraper", "scrape"]).unwrap();
        let config = cli.to_config().unwrap();
        assert_eq!(config.base_origin(), "https://github.com/");
        assert_eq!(config.output_dir, PathBuf::from("Output_Data_csv_files"));
        assert_eq!(config.policy, CorrelationPolicy::FailFast);
        assert_eq!(config.pages, None);
        assert!(matches!(cli.command, Commands::Scrape { json: false }));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "topic-scraper",
            "topics",
            "--json",
            "--pages",
            "3",
            "--on-mismatch",
            "truncate",
            "--concurrency",
            "0",
        ])
        .unwrap();
        let config = cli.to_config().unwrap();
        assert_eq!(config.pages, Some(3));
        assert_eq!(config.policy, CorrelationPolicy::Truncate);
        assert_eq!(config.concurrency, 1);
    }
}
