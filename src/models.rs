// src/models.rs
// =============================================================================
// The records produced by the scraper.
//
// - Topic: one entry from the topics listing
// - Repository: one entry from a topic's leaderboard; this is also the CSV row
// =============================================================================

use serde::{Deserialize, Serialize};

/// A topic from the listing page
///
/// All three fields come from the same position in three separately
/// extracted fragment sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// A repository from a topic page
///
/// The serde names are the CSV column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(rename = "username")]
    pub owner: String,
    #[serde(rename = "repo_name")]
    pub name: String,
    #[serde(rename = "stars")]
    pub star_count: u64,
    #[serde(rename = "repo_url")]
    pub url: String,
}
