use std::{io::Read, path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error, error::CheckError, export, fetch, info, management::TokenManager, success,
    types::PopularityTableRow,
    utils::{self, FetchMode},
    warning,
};

/// Runs the full popularity check: extract, fetch, aggregate, render, export.
///
/// `input` is a file of pasted track links; stdin is read when it is absent.
/// The run stops before any network call when the input contains no links or
/// more than `limit` links.
pub async fn check(
    input: Option<PathBuf>,
    mode: FetchMode,
    delay_ms: u64,
    limit: usize,
    output: PathBuf,
) {
    // credentials are checked before anything else happens, even when a
    // cached token could still serve the run
    if let Err(e) = config::ensure_credentials() {
        error!("{}", e);
    }

    let text = match read_input(input).await {
        Ok(text) => text,
        Err(e) => {
            error!("Cannot read input: {}", e);
        }
    };

    let track_ids = utils::extract_track_ids(&text);

    if let Err(e) = utils::check_track_count(&track_ids, limit) {
        warning!("{}", e);
        if matches!(e, CheckError::NoTrackLinks) {
            info!(
                "Paste one link per line, e.g. https://open.spotify.com/track/4cOdK2wGLETKBW3PvgPWqT"
            );
        }
        return;
    }

    let mut token_mgr = match TokenManager::obtain().await {
        Ok(manager) => manager,
        Err(e) => {
            error!("Cannot authenticate against the Spotify API: {}", e);
        }
    };

    info!(
        "Checking {count} tracks in {mode} mode...",
        count = track_ids.len(),
        mode = mode
    );

    let pb = ProgressBar::new_spinner();
    pb.set_message("Resolving track popularity...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let report = fetch::fetch_popularity(&mut token_mgr, &track_ids, mode, delay_ms, &pb).await;

    pb.finish_and_clear();

    if !report.failures.is_empty() {
        warning!(
            "{failed} of {attempted} lookups failed and were skipped.",
            failed = report.failures.len(),
            attempted = report.attempted()
        );
    }

    if report.records.is_empty() {
        warning!(
            "{}",
            CheckError::NothingResolved {
                attempted: report.attempted()
            }
        );
        return;
    }

    let mut records = report.records;
    utils::sort_by_popularity(&mut records);

    let table_rows: Vec<PopularityTableRow> = records
        .iter()
        .enumerate()
        .map(|(i, r)| PopularityTableRow {
            rank: i + 1,
            name: r.name.clone(),
            artist: r.artist.clone(),
            popularity: r.popularity,
            id: r.id.clone(),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);

    info!(
        "{count} tracks | mean popularity {mean} | max {max}",
        count = records.len(),
        mean = utils::mean_popularity(&records),
        max = utils::max_popularity(&records)
    );

    match export::write_csv(&records, &output).await {
        Ok(_) => success!("Results exported to {}", output.display()),
        Err(e) => warning!("Cannot export results to {}: {}", output.display(), e),
    }
}

async fn read_input(input: Option<PathBuf>) -> Result<String, String> {
    match input {
        Some(path) => async_fs::read_to_string(&path)
            .await
            .map_err(|e| format!("{}: {}", path.display(), e)),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| e.to_string())?;
            Ok(text)
        }
    }
}
