use std::fmt;

use crate::{error::CheckError, types::TrackRecord};

/// Default ceiling for the number of track links accepted per run.
pub const DEFAULT_TRACK_LIMIT: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Resolve up to 50 tracks per API call via the several-tracks endpoint.
    Batch,
    /// Resolve one track per API call with a delay in between. Slower, but a
    /// fallback when the batch endpoint misbehaves.
    Singleton,
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchMode::Batch => write!(f, "batch"),
            FetchMode::Singleton => write!(f, "singleton"),
        }
    }
}

impl Default for FetchMode {
    fn default() -> Self {
        FetchMode::Batch
    }
}

pub fn parse_fetch_mode(input: &str) -> Result<FetchMode, String> {
    match input.trim().to_ascii_lowercase().as_str() {
        "batch" => Ok(FetchMode::Batch),
        "singleton" | "single" => Ok(FetchMode::Singleton),
        "" => Err("fetch mode cannot be empty".to_string()),
        other => Err(format!(
            "invalid value '{}' (expected 'batch' or 'singleton')",
            other
        )),
    }
}

/// Extracts Spotify track IDs from free-form pasted text.
///
/// The text is split on line breaks; each non-empty line is searched for a
/// `/track/` path segment followed by an alphanumeric token. Lines without a
/// match are silently skipped. The returned IDs keep first-seen order and are
/// NOT deduplicated: pasting the same link twice checks it twice.
pub fn extract_track_ids(input: &str) -> Vec<String> {
    input
        .lines()
        .filter_map(|line| extract_track_id(line.trim()))
        .collect()
}

fn extract_track_id(line: &str) -> Option<String> {
    let marker = "/track/";
    let start = line.find(marker)? + marker.len();
    let id: String = line[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();

    if id.is_empty() { None } else { Some(id) }
}

/// Rejects oversized pastes before any network I/O happens.
///
/// Returns [`CheckError::TooManyTracks`] carrying the actual count when more
/// than `limit` IDs were extracted, and [`CheckError::NoTrackLinks`] when
/// there are none at all.
pub fn check_track_count(track_ids: &[String], limit: usize) -> Result<(), CheckError> {
    if track_ids.is_empty() {
        return Err(CheckError::NoTrackLinks);
    }

    if track_ids.len() > limit {
        return Err(CheckError::TooManyTracks {
            count: track_ids.len(),
            limit,
        });
    }

    Ok(())
}

/// Sorts records by popularity descending. `sort_by` is stable, so tracks
/// with equal scores keep their original relative order.
pub fn sort_by_popularity(records: &mut Vec<TrackRecord>) {
    records.sort_by(|a, b| b.popularity.cmp(&a.popularity));
}

/// Arithmetic mean of the popularity scores, truncated toward zero.
///
/// Integer division on purpose: scores [10, 10, 11] average to 10, not 10.33.
/// Returns 0 for an empty slice.
pub fn mean_popularity(records: &[TrackRecord]) -> u32 {
    if records.is_empty() {
        return 0;
    }

    let sum: u32 = records.iter().map(|r| r.popularity as u32).sum();
    sum / records.len() as u32
}

/// Highest popularity score in the set, 0 for an empty slice.
pub fn max_popularity(records: &[TrackRecord]) -> u8 {
    records.iter().map(|r| r.popularity).max().unwrap_or(0)
}
