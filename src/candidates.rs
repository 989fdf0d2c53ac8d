//! Registry result parsing and tag filtering.

use chrono::{DateTime, Datelike, NaiveDateTime};

use crate::error::DeployResult;

/// A deployable image: tag plus a display-formatted push timestamp.
///
/// Tags are opaque; duplicates from the registry pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    pub tag: String,
    pub pushed_at: String,
}

/// Parser output: candidates in registry order plus any timestamp
/// normalization warnings.
#[derive(Debug, Default)]
pub struct ParsedCandidates {
    pub candidates: Vec<ImageCandidate>,
    pub warnings: Vec<String>,
}

/// Decode the registry pipeline output.
///
/// Empty output is an empty list, not an error. Entries whose timestamp fails
/// to normalize keep the raw value and produce a warning; entries are never
/// dropped and order is preserved.
pub fn parse_candidates(raw: &str) -> DeployResult<ParsedCandidates> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(ParsedCandidates::default());
    }

    let entries: Vec<(String, String)> = serde_json::from_str(trimmed)?;

    let mut parsed = ParsedCandidates::default();
    for (tag, timestamp) in entries {
        let pushed_at = match normalize_timestamp(&timestamp) {
            Some(display) => display,
            None => {
                parsed.warnings.push(format!(
                    "Exception during date format: invalid timestamp '{}'",
                    timestamp
                ));
                timestamp
            }
        };
        parsed.candidates.push(ImageCandidate { tag, pushed_at });
    }

    Ok(parsed)
}

/// Normalize an ISO-8601 timestamp into `"March 5 02:30PM"` form: full month
/// name, unpadded day, zero-padded 12-hour time.
///
/// Accepts offset-carrying and naive timestamps, with or without fractional
/// seconds. Returns `None` when the input is not ISO-8601.
pub fn normalize_timestamp(timestamp: &str) -> Option<String> {
    let dt: NaiveDateTime = match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.naive_local(),
        Err(_) => timestamp.parse().ok()?,
    };

    Some(format!(
        "{} {} {}",
        dt.format("%B"),
        dt.day(),
        dt.format("%I:%M%p")
    ))
}

/// Retain candidates whose tag contains `filter` as a case-sensitive
/// substring. `None` passes the sequence through unchanged.
pub fn filter_candidates(
    candidates: Vec<ImageCandidate>,
    filter: Option<&str>,
) -> Vec<ImageCandidate> {
    match filter {
        Some(f) => candidates
            .into_iter()
            .filter(|c| c.tag.contains(f))
            .collect(),
        None => candidates,
    }
}
