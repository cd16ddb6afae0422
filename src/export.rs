//! CSV export of checked tracks.

use std::path::Path;

use crate::types::TrackRecord;

/// Default file name for the exported results.
pub const CSV_FILE_NAME: &str = "popularity_results.csv";

/// Column headers of the exported file.
pub const CSV_HEADER: [&str; 5] = ["Rank", "Song Name", "Artist", "Popularity", "Spotify ID"];

/// Serializes the records as UTF-8 CSV, header row included.
///
/// Rank is the 1-based position within `records`, so callers pass the
/// popularity-sorted view. Fields containing the delimiter or quotes are
/// quoted by the writer.
pub fn render_csv(records: &[TrackRecord]) -> Result<String, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;

    for (i, record) in records.iter().enumerate() {
        writer.write_record(&[
            (i + 1).to_string(),
            record.name.clone(),
            record.artist.clone(),
            record.popularity.to_string(),
            record.id.clone(),
        ])?;
    }

    writer.flush()?;
    let data = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;

    // the writer only ever receives UTF-8 strings
    Ok(String::from_utf8(data).expect("CSV output is valid UTF-8"))
}

/// Renders the records as CSV and writes them to `path`.
pub async fn write_csv(records: &[TrackRecord], path: &Path) -> Result<(), String> {
    let csv = render_csv(records).map_err(|e| e.to_string())?;
    async_fs::write(path, csv).await.map_err(|e| e.to_string())
}
