// src/output/writer.rs
// =============================================================================
// This module writes one CSV file per topic.
//
// A finished file is the record that a topic has been scraped: if it exists,
// the topic is skipped. To keep that marker honest the rows are written to a
// temp file in the same directory and renamed into place only when complete.
//
// File layout:
//   username,repo_name,stars,repo_url
//   mrdoob,three.js,94200,https://github.com/mrdoob/three.js
// =============================================================================

use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Result, ScrapeError};
use crate::models::Repository;

pub const CSV_HEADER: [&str; 4] = ["username", "repo_name", "stars", "repo_url"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written { path: PathBuf, rows: usize },
    Skipped { path: PathBuf },
}

/// Writes `rows` as CSV to `path`, unless a file is already there
pub fn write_topic_records(path: &Path, rows: &[Repository]) -> Result<WriteOutcome> {
    if path.exists() {
        return Ok(WriteOutcome::Skipped {
            path: path.to_path_buf(),
        });
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;

    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(tmp);
    // Written by hand so an empty topic still gets a header row
    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }

    let tmp = writer
        .into_inner()
        .map_err(|e| ScrapeError::Io(e.into_error()))?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| ScrapeError::Io(e.error))?;

    Ok(WriteOutcome::Written {
        path: path.to_path_buf(),
        rows: rows.len(),
    })
}

/// Reads a file written by write_topic_records back into records
pub fn read_topic_records(path: &Path) -> Result<Vec<Repository>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    if headers.iter().ne(CSV_HEADER.iter().copied()) {
        return Err(ScrapeError::Parse(format!(
            "unexpected CSV header in {}: {:?}",
            path.display(),
            headers
        )));
    }

    reader
        .deserialize::<Repository>()
        .map(|row| row.map_err(ScrapeError::from))
        .collect()
}
