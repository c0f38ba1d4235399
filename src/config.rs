// src/config.rs
// =============================================================================
// Runtime configuration for a scrape run.
//
// The CLI (cli.rs) fills this in from flags and environment variables.
// Library functions take a &Config instead of reading globals, so tests can
// point the scraper at a local server and a temp directory.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::assemble::CorrelationPolicy;
use crate::error::{Result, ScrapeError};
use crate::extract::SelectorTable;

pub const DEFAULT_BASE_URL: &str = "https://github.com";
pub const DEFAULT_OUTPUT_DIR: &str = "Output_Data_csv_files";
pub const DEFAULT_MAX_PAGES: u32 = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Origin of the hosting site; relative links are appended to it
    pub base_url: Url,
    /// Where the per-topic CSV files go
    pub output_dir: PathBuf,
    /// Skip discovery and read exactly this many listing pages
    pub pages: Option<u32>,
    /// Upper bound on listing pages probed during discovery
    pub max_pages: u32,
    pub timeout: Duration,
    /// How many topic pages may be fetched at once
    pub concurrency: usize,
    pub policy: CorrelationPolicy,
    pub selectors: SelectorTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // The constant is a valid absolute URL
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            pages: None,
            max_pages: DEFAULT_MAX_PAGES,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            concurrency: 1,
            policy: CorrelationPolicy::default(),
            selectors: SelectorTable::default(),
        }
    }
}

impl Config {
    /// Same as Default, but pointed at another site
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            ..Self::default()
        })
    }

    /// The base origin as a string, e.g. "https://github.com/"
    pub fn base_origin(&self) -> &str {
        self.base_url.as_str()
    }

    /// URL of the N-th (1-based) topics listing page
    pub fn listing_url(&self, page: u32) -> Result<String> {
        let mut url = self
            .base_url
            .join("topics")
            .map_err(|e| ScrapeError::Config(format!("Cannot build listing URL: {}", e)))?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        Ok(url.to_string())
    }
}

/// Parses and checks a base URL from user input
///
/// Only a bare origin is accepted. Listing URLs are built from the root
/// ("/topics") while links are appended to the base as given, so a path
/// would send the two to different places.
pub fn parse_base_url(input: &str) -> Result<Url> {
    let url = Url::parse(input).map_err(|e| ScrapeError::Config(format!("Invalid base URL '{}': {}", input, e)))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ScrapeError::Config(format!("Base URL must be http(s): {}", input)));
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(ScrapeError::Config(format!(
            "Base URL must be an origin without path, query or fragment: {}",
            input
        )));
    }
    Ok(url)
}
