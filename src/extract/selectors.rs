// src/extract/selectors.rs
// =============================================================================
// The selector table: which markup fragments hold which field.
//
// The hosting site's class names change from time to time. Every selector
// lives here, in one table, so a markup change means editing this table (or
// passing a JSON override file with --selectors) and nothing else.
//
// A selector is a tag plus an optional exact attribute match. It renders to
// CSS as `tag[attr="value"]`, which matches the whole attribute string, the
// same way the site's full class lists are written.
// =============================================================================

use std::path::Path;

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrapeError};

/// The named fields the extractor knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TopicTitle,
    TopicDescription,
    TopicLink,
    RepoEntry,
    RepoLink,
    StarCount,
}

/// An exact attribute match, e.g. class="f5 color-fg-muted mb-0 mt-1"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrMatch {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelector {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr: Option<AttrMatch>,
}

impl FieldSelector {
    pub fn tag(tag: &str) -> Self {
        Self { tag: tag.to_string(), attr: None }
    }

    pub fn with_attr(tag: &str, name: &str, value: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attr: Some(AttrMatch {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Renders the selector as a CSS selector string
    pub fn css(&self) -> String {
        match &self.attr {
            Some(attr) => {
                let value = attr.value.replace('\\', "\\\\").replace('"', "\\\"");
                format!("{}[{}=\"{}\"]", self.tag, attr.name, value)
            }
            None => self.tag.clone(),
        }
    }

    /// Parses the CSS form into a scraper Selector
    pub fn compile(&self) -> Result<Selector> {
        let css = self.css();
        // The parse error borrows `css`, so turn it into a String first
        let parsed = Selector::parse(&css).map_err(|e| e.to_string());
        parsed.map_err(|reason| ScrapeError::Selector { css, reason })
    }
}

/// One selector per field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorTable {
    pub topic_title: FieldSelector,
    pub topic_description: FieldSelector,
    pub topic_link: FieldSelector,
    pub repo_entry: FieldSelector,
    pub repo_link: FieldSelector,
    pub star_count: FieldSelector,
}

impl Default for SelectorTable {
    fn default() -> Self {
        Self {
            topic_title: FieldSelector::with_attr("p", "class", "f3 lh-condensed mb-0 mt-1 Link--primary"),
            topic_description: FieldSelector::with_attr("p", "class", "f5 color-fg-muted mb-0 mt-1"),
            topic_link: FieldSelector::with_attr("a", "class", "no-underline flex-1 d-flex flex-column"),
            repo_entry: FieldSelector::with_attr(
                "article",
                "class",
                "border rounded color-shadow-small color-bg-subtle my-4",
            ),
            repo_link: FieldSelector::tag("a"),
            star_count: FieldSelector::with_attr("span", "id", "repo-stars-counter-star"),
        }
    }
}

impl SelectorTable {
    pub fn get(&self, field: Field) -> &FieldSelector {
        match field {
            Field::TopicTitle => &self.topic_title,
            Field::TopicDescription => &self.topic_description,
            Field::TopicLink => &self.topic_link,
            Field::RepoEntry => &self.repo_entry,
            Field::RepoLink => &self.repo_link,
            Field::StarCount => &self.star_count,
        }
    }

    /// Loads a table from a JSON file and checks every selector compiles
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let table: SelectorTable = serde_json::from_str(&text)?;
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<()> {
        for field in [
            Field::TopicTitle,
            Field::TopicDescription,
            Field::TopicLink,
            Field::RepoEntry,
            Field::RepoLink,
            Field::StarCount,
        ] {
            self.get(field).compile()?;
        }
        Ok(())
    }
}
