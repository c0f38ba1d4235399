// src/extract/mod.rs
// =============================================================================
// This module contains all HTML extraction logic.
//
// Submodules:
// - selectors: The table of selectors, one per named field
// - fields: Finding fragments in a parsed document
// - stars: Normalizing star counts like "3.5k"
// =============================================================================

mod fields;
mod selectors;
mod stars;

pub use fields::{
    extract_all, extract_field, extract_nth, extract_within, fragment_link, fragment_text, Document,
};
pub use selectors::{AttrMatch, Field, FieldSelector, SelectorTable};
pub use stars::parse_star_count;
