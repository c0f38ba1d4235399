// src/extract/fields.rs
// =============================================================================
// This module pulls named fields out of a parsed HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Returns matches in document order (top-to-bottom, depth-first)
//
// Document order matters here: the assemblers pair up fragments purely by
// their position, so the N-th title must line up with the N-th description.
//
// Rust concepts:
// - Lifetimes: ElementRef<'a> borrows from the Document it came from
// - Iterators: For walking over matches
// - Option<T>: For "maybe there is an N-th match"
// =============================================================================

use scraper::{ElementRef, Html};

use super::selectors::{Field, FieldSelector, SelectorTable};
use crate::error::Result;

/// A parsed HTML page
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }
}

/// Returns every fragment matching `selector`, in document order
///
/// No match is not an error: the result is just empty.
pub fn extract_all<'a>(doc: &'a Document, selector: &FieldSelector) -> Result<Vec<ElementRef<'a>>> {
    let compiled = selector.compile()?;
    Ok(doc.html.select(&compiled).collect())
}

/// Returns every occurrence of a named field
pub fn extract_field<'a>(doc: &'a Document, table: &SelectorTable, field: Field) -> Result<Vec<ElementRef<'a>>> {
    extract_all(doc, table.get(field))
}

/// Returns the N-th (0-based) occurrence of a named field, if there is one
pub fn extract_nth<'a>(
    doc: &'a Document,
    table: &SelectorTable,
    field: Field,
    n: usize,
) -> Result<Option<ElementRef<'a>>> {
    let compiled = table.get(field).compile()?;
    Ok(doc.html.select(&compiled).nth(n))
}

/// Returns the fragments matching `selector` inside one element
pub fn extract_within<'a>(element: ElementRef<'a>, selector: &FieldSelector) -> Result<Vec<ElementRef<'a>>> {
    let compiled = selector.compile()?;
    Ok(element.select(&compiled).collect())
}

/// The fragment's text content with surrounding whitespace trimmed
pub fn fragment_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// The absolute URL of a link fragment: base origin + relative href
///
/// Returns None when the fragment has no href.
pub fn fragment_link(element: &ElementRef<'_>, base_origin: &str) -> Option<String> {
    element
        .value()
        .attr("href")
        .map(|href| format!("{}{}", base_origin.trim_end_matches('/'), href.trim()))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does extract_all return ElementRef<'a>?
//    - ElementRef is a cheap handle pointing into the Document's tree
//    - The 'a lifetime says "this handle can't outlive the Document"
//    - The compiler stops us from dropping the page while still using matches
//
// 2. Why concatenate instead of Url::join?
//    - The site's links are root-relative ("/topics/3d")
//    - Plain concatenation with the origin gives the absolute URL directly
//
// 3. What does .nth(n) do?
//    - Advances an iterator n times and returns the next item
//    - It returns None if the iterator runs out first
// -----------------------------------------------------------------------------
