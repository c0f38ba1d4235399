// src/crawl/mod.rs
// =============================================================================
// This module handles walking the topics listing.
//
// Features:
// - Page-by-page probing until the first empty page
// - A cap on the number of pages probed
// - A replaceable "is this the last page?" predicate
// - A page-count override that skips discovery
// =============================================================================

mod paginator;

pub use paginator::{Listing, Paginator, StopPredicate};
