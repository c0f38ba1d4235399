// src/error.rs
// =============================================================================
// This module defines the error type shared by the whole library.
//
// Every fallible function in the library returns Result<T, ScrapeError>.
// The binary (main.rs) wraps these in anyhow for friendly top-level messages.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - #[from]: lets the ? operator convert foreign errors automatically
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Non-success HTTP status or transport failure
    #[error("Failed to load page {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Malformed star count or repository container
    #[error("Parse error: {0}")]
    Parse(String),

    /// Parallel fragment sequences had different lengths
    #[error("Correlation error: {0}")]
    Correlation(String),

    /// A selector in the table is not valid CSS
    #[error("Invalid selector '{css}': {reason}")]
    Selector { css: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
