use spopcli::fetch::{FetchReport, collect_batch_entries};
use spopcli::types::{Track, TrackArtist};
use spopcli::utils::{max_popularity, mean_popularity};

fn create_test_track(id: &str, name: &str, artist: &str, popularity: u8) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        artists: vec![TrackArtist {
            id: format!("{}_artist_id", id),
            name: artist.to_string(),
        }],
        popularity,
    }
}

#[test]
fn test_null_entry_drops_exactly_one_track() {
    let chunk = vec!["good1".to_string(), "gone2".to_string()];
    let entries = vec![
        Some(create_test_track("good1", "Song One", "Artist A", 55)),
        None,
    ];

    let mut report = FetchReport::default();
    collect_batch_entries(&chunk, entries, &mut report);

    // One record survives, the failing lookup removes only its own track
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].id, "good1");
    assert_eq!(report.records[0].popularity, 55);

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].id, "gone2");
    assert!(report.failures[0].reason.contains("not found"));

    assert_eq!(report.attempted(), 2);
    assert_eq!(mean_popularity(&report.records), 55);
    assert_eq!(max_popularity(&report.records), 55);
}

#[test]
fn test_batch_entries_keep_lookup_order() {
    let chunk = vec![
        "id1".to_string(),
        "id2".to_string(),
        "id3".to_string(),
        "id4".to_string(),
    ];
    let entries = vec![
        Some(create_test_track("id1", "First", "A", 10)),
        None,
        Some(create_test_track("id3", "Third", "C", 90)),
        Some(create_test_track("id4", "Fourth", "D", 40)),
    ];

    let mut report = FetchReport::default();
    collect_batch_entries(&chunk, entries, &mut report);

    // Records stay in request order; scores do not reorder anything here
    let ids: Vec<&str> = report.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["id1", "id3", "id4"]);
    assert_eq!(report.failures[0].id, "id2");
}

#[test]
fn test_all_null_entries_resolve_nothing() {
    let chunk = vec!["a".to_string(), "b".to_string()];
    let entries: Vec<Option<Track>> = vec![None, None];

    let mut report = FetchReport::default();
    collect_batch_entries(&chunk, entries, &mut report);

    assert!(report.records.is_empty());
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.attempted(), 2);
}
