// src/assemble/repos.rs
// =============================================================================
// Builds Repository records from one topic page.
//
// Each repository container holds (at least) two links:
//   1st link -> the owner ("username")
//   2nd link -> the repository, whose href is also the repository URL
//
// Star counters sit outside the containers and are matched by position,
// so the N-th container pairs with the N-th star counter.
// =============================================================================

use scraper::ElementRef;

use super::correlate::{correlated_len, CorrelationPolicy};
use crate::error::{Result, ScrapeError};
use crate::extract::{
    extract_field, extract_within, fragment_link, fragment_text, parse_star_count, Document, Field, SelectorTable,
};
use crate::models::Repository;

/// Zips repository containers with star counters on a topic page
///
/// Only the top page of a topic is read; the site shows 25 repositories there.
pub fn assemble_repositories(
    doc: &Document,
    selectors: &SelectorTable,
    base_origin: &str,
    policy: CorrelationPolicy,
) -> Result<Vec<Repository>> {
    let entries = extract_field(doc, selectors, Field::RepoEntry)?;
    let stars = extract_field(doc, selectors, Field::StarCount)?;

    let len = correlated_len(
        policy,
        "topic page",
        &[("repositories", entries.len()), ("star counters", stars.len())],
    )?;

    let mut repositories = Vec::with_capacity(len);
    for i in 0..len {
        repositories.push(repository_info(entries[i], &stars[i], selectors, base_origin)?);
    }
    Ok(repositories)
}

fn repository_info(
    entry: ElementRef<'_>,
    star: &ElementRef<'_>,
    selectors: &SelectorTable,
    base_origin: &str,
) -> Result<Repository> {
    let links = extract_within(entry, selectors.get(Field::RepoLink))?;
    if links.len() < 2 {
        return Err(ScrapeError::Parse(format!(
            "repository container has {} link(s), expected owner and repository",
            links.len()
        )));
    }

    let repo_link = &links[1];
    let url = fragment_link(repo_link, base_origin)
        .ok_or_else(|| ScrapeError::Parse("repository link has no href".to_string()))?;

    Ok(Repository {
        owner: fragment_text(&links[0]),
        name: fragment_text(repo_link),
        star_count: parse_star_count(&fragment_text(star))?,
        url,
    })
}
