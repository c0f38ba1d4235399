// src/scrape/mod.rs
// =============================================================================
// This module runs a full scrape.
//
// How it works:
// 1. Read the topics listing (all pages) with the Paginator
// 2. Create the output directory
// 3. For each topic:
//    - if its CSV file exists, skip it without fetching anything
//    - otherwise fetch the topic page, assemble repositories, write the CSV
// 4. A failing topic is recorded in the report and the run moves on
//
// Topic pages are fetched one at a time by default. With concurrency > 1 up to
// that many are in flight, and results still come back in listing order.
// =============================================================================

mod report;

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::assemble::assemble_repositories;
use crate::config::Config;
use crate::crawl::Paginator;
use crate::error::Result;
use crate::extract::Document;
use crate::fetch::Fetch;
use crate::models::Topic;
use crate::output::{topic_output_path, write_topic_records, WriteOutcome};

pub use report::{RunReport, TopicResult, TopicStatus};

/// Scrapes one topic page into `<output_dir>/<title>.csv`
///
/// The existence check comes first, so a finished topic costs no request.
pub async fn scrape_topic<F: Fetch + ?Sized>(fetcher: &F, config: &Config, topic: &Topic) -> Result<WriteOutcome> {
    let path = topic_output_path(&config.output_dir, &topic.title);
    if path.exists() {
        info!("The file {} already exists. Skipping...", path.display());
        return Ok(WriteOutcome::Skipped { path });
    }

    let body = fetcher.fetch(&topic.url).await?;
    let repositories = {
        let doc = Document::parse(&body);
        assemble_repositories(&doc, &config.selectors, config.base_origin(), config.policy)?
    };

    let outcome = write_topic_records(&path, &repositories)?;
    if let WriteOutcome::Written { rows, .. } = &outcome {
        info!("Wrote {} repositories to {}", rows, path.display());
    }
    Ok(outcome)
}

/// Scrapes every topic in the listing
///
/// Only a listing failure is returned as Err; per-topic failures end up in
/// the report.
pub async fn scrape_topics_repos<F: Fetch + ?Sized>(fetcher: &F, config: &Config) -> Result<RunReport> {
    info!("Scraping list of topics");
    let listing = Paginator::new(fetcher, config).collect_topics().await?;
    info!("Found {} topic(s) on {} page(s)", listing.topics.len(), listing.pages);

    std::fs::create_dir_all(&config.output_dir)?;

    let results = stream::iter(listing.topics.iter())
        .map(|topic| async move {
            info!("Scraping top repositories for \"{}\"", topic.title);
            let status = match scrape_topic(fetcher, config, topic).await {
                Ok(WriteOutcome::Written { rows, .. }) => TopicStatus::Written { rows },
                Ok(WriteOutcome::Skipped { .. }) => TopicStatus::Skipped,
                Err(e) => {
                    warn!("Failed to scrape \"{}\": {}", topic.title, e);
                    TopicStatus::Failed { error: e.to_string() }
                }
            };
            TopicResult {
                title: topic.title.clone(),
                path: topic_output_path(&config.output_dir, &topic.title),
                status,
            }
        })
        .buffered(config.concurrency.max(1))
        .collect::<Vec<_>>()
        .await;

    Ok(RunReport {
        pages: listing.pages,
        results,
    })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. buffered vs buffer_unordered
//    - Both run up to N futures at once
//    - buffered(N) yields results in the order the futures were created
//    - buffer_unordered(N) yields them as they finish
//    - We want listing order in the report, so we use buffered
//
// 2. Why is `doc` inside its own block in scrape_topic?
//    - A parsed scraper::Html can't be sent between threads
//    - Keeping it in a block means it's gone before anything else happens,
//      so it never has to live inside the future across an .await
// -----------------------------------------------------------------------------
