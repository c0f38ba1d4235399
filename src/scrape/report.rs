// src/scrape/report.rs
// What happened to each topic during a run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TopicStatus {
    /// A new CSV file was written
    Written { rows: usize },
    /// The CSV file already existed; nothing was fetched
    Skipped,
    /// Fetching, parsing or writing failed; no file was written
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicResult {
    pub title: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: TopicStatus,
}

impl TopicResult {
    pub fn is_ok(&self) -> bool {
        !matches!(self.status, TopicStatus::Failed { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Listing pages read
    pub pages: u32,
    /// One entry per topic, in listing order
    pub results: Vec<TopicResult>,
}

impl RunReport {
    pub fn written(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.status, TopicStatus::Written { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == TopicStatus::Skipped)
            .count()
    }

    pub fn failures(&self) -> Vec<&TopicResult> {
        self.results.iter().filter(|r| !r.is_ok()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let result = |title: &str, status| TopicResult {
            title: title.to_string(),
            path: PathBuf::from(format!("out/{}.csv", title)),
            status,
        };
        let report = RunReport {
            pages: 1,
            results: vec![
                result("3D", TopicStatus::Written { rows: 25 }),
                result("Ajax", TopicStatus::Skipped),
                result("Algorithm", TopicStatus::Failed { error: "HTTP 500".to_string() }),
            ],
        };

        assert_eq!(report.written(), 1);
        assert_eq!(report.skipped(), 1);
        let failures = report.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].title, "Algorithm");
    }

    #[test]
    fn test_status_serializes_flat() {
        let result = TopicResult {
            title: "3D".to_string(),
            path: PathBuf::from("out/3D.csv"),
            status: TopicStatus::Written { rows: 25 },
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "written");
        assert_eq!(json["rows"], 25);
        assert_eq!(json["title"], "3D");
    }
}
