// src/extract/stars.rs
// Turns the star counter text ("900", "3.5k") into a number.

use crate::error::{Result, ScrapeError};

/// Parses a displayed star count
///
/// A trailing lowercase `k` means thousands: "3.5k" is 3500. Anything else
/// must be a plain non-negative integer. There is no `m` suffix.
pub fn parse_star_count(display: &str) -> Result<u64> {
    let stars = display.trim();
    if stars.is_empty() {
        return Err(ScrapeError::Parse("empty star count".to_string()));
    }

    let invalid = || ScrapeError::Parse(format!("invalid star count '{}'", stars));

    if let Some(thousands) = stars.strip_suffix('k') {
        // Digits with at most one '.', so no sign, exponent, "inf" or "NaN"
        let digits = thousands.chars().filter(|c| c.is_ascii_digit()).count();
        let dots = thousands.chars().filter(|&c| c == '.').count();
        if digits == 0 || dots > 1 || digits + dots != thousands.len() {
            return Err(invalid());
        }
        let value: f64 = thousands.parse().map_err(|_| invalid())?;
        // Round so float artifacts like 2.3 * 1000 = 2299.999... land on 2300
        return Ok((value * 1000.0).round() as u64);
    }

    // u64::from_str takes a leading '+', which the counter never shows
    if !stars.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    stars.parse::<u64>().map_err(|_| invalid())
}
