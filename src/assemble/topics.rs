// src/assemble/topics.rs
// Builds Topic records from one listing page.

use super::correlate::{correlated_len, CorrelationPolicy};
use crate::error::{Result, ScrapeError};
use crate::extract::{extract_field, fragment_link, fragment_text, Document, Field, SelectorTable};
use crate::models::Topic;

/// Zips the title, description and link fragments of a listing page
///
/// A link fragment without an href is a `Parse` error; dropping it would shift
/// every later topic out of line with its title.
pub fn assemble_topics(
    doc: &Document,
    selectors: &SelectorTable,
    base_origin: &str,
    policy: CorrelationPolicy,
) -> Result<Vec<Topic>> {
    let titles = extract_field(doc, selectors, Field::TopicTitle)?;
    let descriptions = extract_field(doc, selectors, Field::TopicDescription)?;
    let links = extract_field(doc, selectors, Field::TopicLink)?;

    let len = correlated_len(
        policy,
        "topic listing",
        &[
            ("titles", titles.len()),
            ("descriptions", descriptions.len()),
            ("links", links.len()),
        ],
    )?;

    let mut topics = Vec::with_capacity(len);
    for i in 0..len {
        let title = fragment_text(&titles[i]);
        let url = fragment_link(&links[i], base_origin)
            .ok_or_else(|| ScrapeError::Parse(format!("topic link for '{}' has no href", title)))?;
        topics.push(Topic {
            title,
            description: fragment_text(&descriptions[i]),
            url,
        });
    }

    Ok(topics)
}
