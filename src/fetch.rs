//! Bounded popularity fetch loop.
//!
//! Resolves an extracted list of track IDs against the Spotify Web API,
//! either in chunks of up to 50 (batch mode) or one call per track with a
//! fixed delay in between (singleton mode). A failed lookup never aborts the
//! run: the affected track is recorded as a [`FailedLookup`] and the loop
//! moves on. Successful records keep lookup order, which equals extraction
//! order.

use std::time::Duration;

use indicatif::ProgressBar;
use tokio::time::sleep;

use crate::{management::TokenManager, spotify, types::{Track, TrackRecord}, utils::FetchMode};

/// Maximum number of IDs per several-tracks API call, imposed by Spotify.
pub const BATCH_CHUNK_SIZE: usize = 50;

/// A lookup that did not produce a record, with the reason it failed.
/// Collected instead of aborting so one dead link cannot sink a 500-link
/// paste.
#[derive(Debug, Clone)]
pub struct FailedLookup {
    pub id: String,
    pub reason: String,
}

/// Outcome of one fetch run: the resolved tracks in lookup order plus every
/// lookup that was dropped along the way.
#[derive(Debug, Default)]
pub struct FetchReport {
    pub records: Vec<TrackRecord>,
    pub failures: Vec<FailedLookup>,
}

impl FetchReport {
    pub fn attempted(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

/// Folds one batch response into the report.
///
/// The several-tracks endpoint returns entries lined up with the requested
/// IDs, with `null` for tracks that are unknown, removed or private. Each
/// `null` drops exactly its own track as a [`FailedLookup`]; the surrounding
/// records are unaffected.
pub fn collect_batch_entries(
    chunk: &[String],
    entries: Vec<Option<Track>>,
    report: &mut FetchReport,
) {
    for (id, entry) in chunk.iter().zip(entries) {
        match entry {
            Some(track) => report.records.push(TrackRecord::from(track)),
            None => report.failures.push(FailedLookup {
                id: id.clone(),
                reason: "track not found or unavailable".to_string(),
            }),
        }
    }
}

/// Resolves popularity for all `track_ids` in the configured mode.
///
/// * `delay_ms` only applies between consecutive singleton calls; batch mode
///   relies on the per-response rate-limit handling inside the API layer.
/// * `pb` receives a progress message per processed track/chunk.
pub async fn fetch_popularity(
    token_mgr: &mut TokenManager,
    track_ids: &[String],
    mode: FetchMode,
    delay_ms: u64,
    pb: &ProgressBar,
) -> FetchReport {
    match mode {
        FetchMode::Batch => fetch_batched(token_mgr, track_ids, pb).await,
        FetchMode::Singleton => fetch_one_by_one(token_mgr, track_ids, delay_ms, pb).await,
    }
}

async fn fetch_batched(
    token_mgr: &mut TokenManager,
    track_ids: &[String],
    pb: &ProgressBar,
) -> FetchReport {
    let mut report = FetchReport::default();
    let total = track_ids.len();

    for chunk in track_ids.chunks(BATCH_CHUNK_SIZE) {
        let token = token_mgr.get_valid_token().await;

        match spotify::tracks::get_several_tracks(chunk, &token).await {
            Ok(response) => collect_batch_entries(chunk, response.tracks, &mut report),
            Err(e) => {
                // the whole chunk is dropped, the run goes on
                for id in chunk {
                    report.failures.push(FailedLookup {
                        id: id.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        pb.set_message(format!(
            "Resolved {done}/{total} tracks...",
            done = report.attempted(),
            total = total
        ));
    }

    report
}

async fn fetch_one_by_one(
    token_mgr: &mut TokenManager,
    track_ids: &[String],
    delay_ms: u64,
    pb: &ProgressBar,
) -> FetchReport {
    let mut report = FetchReport::default();
    let total = track_ids.len();

    for (i, id) in track_ids.iter().enumerate() {
        let token = token_mgr.get_valid_token().await;

        match spotify::tracks::get_track(id, &token).await {
            Ok(track) => report.records.push(TrackRecord::from(track)),
            Err(e) => report.failures.push(FailedLookup {
                id: id.clone(),
                reason: e.to_string(),
            }),
        }

        pb.set_message(format!(
            "Resolved {done}/{total} tracks...",
            done = i + 1,
            total = total
        ));

        // stay under the rate limit between consecutive calls
        if i + 1 < total {
            sleep(Duration::from_millis(delay_ms)).await;
        }
    }

    report
}
