// src/assemble/mod.rs
// =============================================================================
// This module turns extracted fragments into records.
//
// Submodules:
// - correlate: The policy for pairing sequences of different lengths
// - topics: Topic records from a listing page
// - repos: Repository records from a topic page
// =============================================================================

mod correlate;
mod repos;
mod topics;

pub use correlate::{correlated_len, CorrelationPolicy};
pub use repos::assemble_repositories;
pub use topics::assemble_topics;
