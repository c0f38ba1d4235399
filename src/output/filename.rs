// src/output/filename.rs
// Maps a topic title to its CSV path.

use std::path::{Path, PathBuf};

/// `<dir>/<title>.csv`, with characters that can't appear in a file name replaced by `_`
pub fn topic_output_path(dir: &Path, title: &str) -> PathBuf {
    dir.join(format!("{}.csv", sanitize_title(title)))
}

fn sanitize_title(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim_start().trim_end_matches(|c: char| c == ' ' || c == '.');
    if cleaned.is_empty() {
        "untitled".to_string()
    } else {
        cleaned.to_string()
    }
}

fn is_forbidden(c: char) -> bool {
    matches!(c, '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}')
}
