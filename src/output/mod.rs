// src/output/mod.rs
// =============================================================================
// This module persists scraped repositories.
//
// Submodules:
// - filename: Topic title -> CSV path
// - writer: Skip-if-exists CSV writing, and reading files back
// =============================================================================

mod filename;
mod writer;

pub use filename::topic_output_path;
pub use writer::{read_topic_records, write_topic_records, WriteOutcome, CSV_HEADER};
