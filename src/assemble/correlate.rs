// src/assemble/correlate.rs
// =============================================================================
// Positional correlation of independently extracted fragment sequences.
//
// Titles, descriptions and links are matched by separate selectors, and so
// are repository containers and star counters. Nothing ties the N-th title to
// the N-th description except their position, so the sequences must have the
// same length. CorrelationPolicy says what to do when they don't.
// =============================================================================

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, ScrapeError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationPolicy {
    /// Refuse to pair sequences of different lengths
    #[default]
    #[value(name = "fail")]
    FailFast,
    /// Pair up to the shortest sequence and drop the rest
    Truncate,
}

/// Checks the lengths of named parallel sequences against the policy
///
/// Returns how many positions may be paired.
pub fn correlated_len(policy: CorrelationPolicy, context: &str, sequences: &[(&str, usize)]) -> Result<usize> {
    let shortest = sequences.iter().map(|(_, len)| *len).min().unwrap_or(0);
    let longest = sequences.iter().map(|(_, len)| *len).max().unwrap_or(0);

    if shortest == longest {
        return Ok(shortest);
    }

    let counts = sequences
        .iter()
        .map(|(name, len)| format!("{}={}", name, len))
        .collect::<Vec<_>>()
        .join(", ");

    match policy {
        CorrelationPolicy::FailFast => Err(ScrapeError::Correlation(format!(
            "{}: fragment counts differ ({})",
            context, counts
        ))),
        CorrelationPolicy::Truncate => {
            warn!("{}: fragment counts differ ({}), keeping {}", context, counts, shortest);
            Ok(shortest)
        }
    }
}
