// src/lib.rs
// =============================================================================
// topic-scraper: scrape GitHub topics and their top repositories.
//
// The pipeline, leaf-first:
// - fetch: download a page (Fetch trait, HttpFetcher)
// - extract: find named fields in a page, parse star counts
// - assemble: pair fragments up into Topic / Repository records
// - crawl: walk the paginated topics listing
// - output: write one CSV per topic, skipping finished topics
// - scrape: run the whole thing and report per-topic results
// =============================================================================

pub mod assemble;
pub mod cli;
pub mod config;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod output;
pub mod scrape;

pub use config::Config;
pub use error::{Result, ScrapeError};
pub use models::{Repository, Topic};
