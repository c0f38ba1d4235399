// src/fetch/mod.rs
// =============================================================================
// This module downloads pages.
//
// The Fetch trait is the seam between the scraper and the network: the
// scraper only ever asks "give me the markup at this URL". HttpFetcher
// answers over HTTP; tests answer from fixtures.
// =============================================================================

mod http;

use async_trait::async_trait;

use crate::error::Result;

pub use http::HttpFetcher;

#[async_trait]
pub trait Fetch: Send + Sync {
    /// Issues a single GET and returns the response body
    ///
    /// Fails with ScrapeError::Fetch on a non-success status or a transport error.
    async fn fetch(&self, url: &str) -> Result<String>;
}
