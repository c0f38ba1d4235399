// src/crawl/paginator.rs
// =============================================================================
// This module walks the paginated topics listing.
//
// How it works:
// 1. Start at page 1
// 2. Fetch /topics?page=N and parse it
// 3. If the stop predicate says the page is empty, the listing has N-1 pages
// 4. Otherwise hand the page to the caller and move on to N+1
// 5. Give up at max_pages, so a site that never runs dry can't loop forever
//
// The default stop predicate is "no topic titles on this page". Callers can
// swap it out with stop_when().
//
// Rust concepts:
// - Box<dyn Fn>: A stored closure whose concrete type we don't name
// - FnMut: A closure that may mutate what it captured (our topic list)
// - Generics with ?Sized: So the fetcher can be a trait object too
// =============================================================================

use tracing::{debug, info, warn};

use crate::assemble::assemble_topics;
use crate::config::Config;
use crate::error::Result;
use crate::extract::{extract_field, Document, Field};
use crate::fetch::Fetch;
use crate::models::Topic;

/// Decides whether a listing page marks the end of the listing
pub type StopPredicate<'a> = Box<dyn Fn(&Document) -> Result<bool> + Send + Sync + 'a>;

/// The outcome of reading the listing
#[derive(Debug, Clone)]
pub struct Listing {
    /// Number of non-empty listing pages read
    pub pages: u32,
    /// Topics from every page, in page order
    pub topics: Vec<Topic>,
}

pub struct Paginator<'a, F: Fetch + ?Sized> {
    fetcher: &'a F,
    config: &'a Config,
    stop: StopPredicate<'a>,
}

impl<'a, F: Fetch + ?Sized> Paginator<'a, F> {
    pub fn new(fetcher: &'a F, config: &'a Config) -> Self {
        let selectors = &config.selectors;
        Self {
            fetcher,
            config,
            stop: Box::new(move |doc: &Document| -> Result<bool> {
                Ok(extract_field(doc, selectors, Field::TopicTitle)?.is_empty())
            }),
        }
    }

    /// Replaces the "page has no topic titles" check
    pub fn stop_when(mut self, stop: impl Fn(&Document) -> Result<bool> + Send + Sync + 'a) -> Self {
        self.stop = Box::new(stop);
        self
    }

    /// Probes listing pages until the first empty one
    ///
    /// Returns the index of the last non-empty page (0 if page 1 is empty).
    pub async fn discover_page_count(&self) -> Result<u32> {
        self.walk(|_, _| Ok(())).await
    }

    /// Reads every listing page and merges their topics
    ///
    /// With a page-count override, reads exactly pages 1..=n and skips discovery.
    pub async fn collect_topics(&self) -> Result<Listing> {
        let mut topics = Vec::new();
        let base_origin = self.config.base_origin();

        let pages = match self.config.pages {
            Some(pages) => {
                for page in 1..=pages {
                    let doc = self.fetch_page(page).await?;
                    topics.extend(assemble_topics(&doc, &self.config.selectors, base_origin, self.config.policy)?);
                }
                pages
            }
            None => {
                self.walk(|_, doc| {
                    topics.extend(assemble_topics(doc, &self.config.selectors, base_origin, self.config.policy)?);
                    Ok(())
                })
                .await?
            }
        };

        Ok(Listing { pages, topics })
    }

    async fn walk<V>(&self, mut visit: V) -> Result<u32>
    where
        V: FnMut(u32, &Document) -> Result<()>,
    {
        for page in 1..=self.config.max_pages {
            let doc = self.fetch_page(page).await?;
            if (self.stop)(&doc)? {
                info!("Topics listing has {} page(s)", page - 1);
                return Ok(page - 1);
            }
            visit(page, &doc)?;
        }

        warn!(
            "Stopped after {} listing pages without reaching an empty page",
            self.config.max_pages
        );
        Ok(self.config.max_pages)
    }

    async fn fetch_page(&self, page: u32) -> Result<Document> {
        let url = self.config.listing_url(page)?;
        debug!("Fetching listing page {}: {}", page, url);
        let body = self.fetcher.fetch(&url).await?;
        Ok(Document::parse(&body))
    }
}
