// src/fetch/http.rs
// =============================================================================
// This module downloads pages over HTTP with reqwest.
//
// Key functionality:
// - One GET per call, no retries
// - Any status other than 200 OK is a failure
// - Transport failures are categorized (timeout, DNS, TLS, ...) so the
//   error message says what went wrong
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E>: For error handling
// - Traits: HttpFetcher implements the Fetch trait from mod.rs
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::Fetch;
use crate::error::{Result, ScrapeError};

/// Fetches pages with a shared reqwest client
///
/// The client is built once and reused for every request (connection pooling).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ScrapeError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(url, categorize_error(&e)))?;

        // 204, 206 and friends are failures too
        let status = response.status();
        if status != StatusCode::OK {
            return Err(fetch_error(url, format!("HTTP {}", status.as_u16())));
        }

        response
            .text()
            .await
            .map_err(|e| fetch_error(url, categorize_error(&e)))
    }
}

fn fetch_error(url: &str, reason: String) -> ScrapeError {
    ScrapeError::Fetch {
        url: url.to_string(),
        reason,
    }
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - SSL certificate issues
// - Connection refused or reset
fn categorize_error(error: &reqwest::Error) -> String {
    let error_string = error.to_string();

    if error.is_timeout() {
        "Request timed out".to_string()
    } else if error.is_redirect() {
        "Too many redirects".to_string()
    } else if error.is_connect() {
        // Connection errors often mean DNS issues or host unreachable
        if error_string.contains("dns") {
            "Could not resolve hostname".to_string()
        } else {
            format!("Connection failed: {}", error_string)
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        "SSL certificate error".to_string()
    } else {
        error_string
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is #[async_trait]?
//    - Traits can't always hold async methods that we call through generics
//      and trait objects alike
//    - The macro rewrites `async fn` into a method returning a boxed future
//
// 2. Why env!("CARGO_PKG_NAME")?
//    - env! reads a variable at compile time
//    - Cargo sets CARGO_PKG_NAME and CARGO_PKG_VERSION for every build
//    - concat! glues them into a &'static str like "topic-scraper/0.1.0"
// -----------------------------------------------------------------------------
