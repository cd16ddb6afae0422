use spopcli::error::CheckError;
use spopcli::types::TrackRecord;
use spopcli::utils::*;

// Helper function to create a test record
fn create_test_record(id: &str, name: &str, artist: &str, popularity: u8) -> TrackRecord {
    TrackRecord {
        id: id.to_string(),
        name: name.to_string(),
        artist: artist.to_string(),
        popularity,
    }
}

#[test]
fn test_extract_track_ids_basic() {
    let input = "https://open.spotify.com/track/ABC123\nnot a link\nhttps://open.spotify.com/track/XYZ789";
    let ids = extract_track_ids(input);

    // The middle line has no track marker and is silently skipped
    assert_eq!(ids, vec!["ABC123", "XYZ789"]);
}

#[test]
fn test_extract_track_ids_order_preserving() {
    let input = "\
https://open.spotify.com/track/first1
https://open.spotify.com/track/second2
https://open.spotify.com/track/third3";
    let ids = extract_track_ids(input);

    assert_eq!(ids, vec!["first1", "second2", "third3"]);
}

#[test]
fn test_extract_track_ids_whitespace_and_crlf() {
    let input = "  https://open.spotify.com/track/AAA111  \r\n\r\n\thttps://open.spotify.com/track/BBB222\r\n";
    let ids = extract_track_ids(input);

    assert_eq!(ids, vec!["AAA111", "BBB222"]);
}

#[test]
fn test_extract_track_ids_stops_at_query_string() {
    let input = "https://open.spotify.com/track/4cOdK2wGLETKBW3PvgPWqT?si=abc_def-123";
    let ids = extract_track_ids(input);

    // the ?si=... share suffix is not part of the ID
    assert_eq!(ids, vec!["4cOdK2wGLETKBW3PvgPWqT"]);
}

#[test]
fn test_extract_track_ids_no_dedup() {
    // Pasting the same link twice means checking it twice
    let input = "https://open.spotify.com/track/SAME01\nhttps://open.spotify.com/track/SAME01";
    let ids = extract_track_ids(input);

    assert_eq!(ids, vec!["SAME01", "SAME01"]);
}

#[test]
fn test_extract_track_ids_empty_input() {
    assert!(extract_track_ids("").is_empty());
    assert!(extract_track_ids("\n\n\n").is_empty());
    assert!(extract_track_ids("just some text\nwithout any links").is_empty());
}

#[test]
fn test_extract_track_ids_marker_without_token() {
    // A track marker with nothing alphanumeric after it is no match
    let ids = extract_track_ids("https://open.spotify.com/track/\nhttps://open.spotify.com/track/?si=x");
    assert!(ids.is_empty());
}

#[test]
fn test_check_track_count_within_limit() {
    let ids: Vec<String> = (0..500).map(|i| format!("id{}", i)).collect();
    assert!(check_track_count(&ids, 500).is_ok());
}

#[test]
fn test_check_track_count_too_many() {
    let ids: Vec<String> = (0..501).map(|i| format!("id{}", i)).collect();

    match check_track_count(&ids, 500) {
        Err(CheckError::TooManyTracks { count, limit }) => {
            assert_eq!(count, 501);
            assert_eq!(limit, 500);
        }
        other => panic!("expected TooManyTracks, got {:?}", other),
    }
}

#[test]
fn test_check_track_count_empty() {
    let ids: Vec<String> = Vec::new();
    assert!(matches!(
        check_track_count(&ids, 500),
        Err(CheckError::NoTrackLinks)
    ));
}

#[test]
fn test_mean_popularity_truncates() {
    let records = vec![
        create_test_record("a", "A", "X", 40),
        create_test_record("b", "B", "Y", 41),
        create_test_record("c", "C", "Z", 45),
    ];

    // (40 + 41 + 45) / 3 = 42 exactly because of integer division
    assert_eq!(mean_popularity(&records), 42);

    let records = vec![
        create_test_record("a", "A", "X", 10),
        create_test_record("b", "B", "Y", 10),
        create_test_record("c", "C", "Z", 11),
    ];

    // truncated toward zero, not rounded
    assert_eq!(mean_popularity(&records), 10);
}

#[test]
fn test_mean_popularity_single_and_empty() {
    let records = vec![create_test_record("a", "A", "X", 55)];
    assert_eq!(mean_popularity(&records), 55);
    assert_eq!(max_popularity(&records), 55);

    assert_eq!(mean_popularity(&[]), 0);
    assert_eq!(max_popularity(&[]), 0);
}

#[test]
fn test_max_popularity() {
    let records = vec![
        create_test_record("a", "A", "X", 12),
        create_test_record("b", "B", "Y", 98),
        create_test_record("c", "C", "Z", 45),
    ];

    assert_eq!(max_popularity(&records), 98);
}

#[test]
fn test_sort_by_popularity_descending() {
    let mut records = vec![
        create_test_record("a", "A", "X", 12),
        create_test_record("b", "B", "Y", 98),
        create_test_record("c", "C", "Z", 45),
    ];

    sort_by_popularity(&mut records);

    let scores: Vec<u8> = records.iter().map(|r| r.popularity).collect();
    assert_eq!(scores, vec![98, 45, 12]);
}

#[test]
fn test_sort_by_popularity_stable_on_ties() {
    let mut records = vec![
        create_test_record("first", "A", "X", 50),
        create_test_record("second", "B", "Y", 70),
        create_test_record("third", "C", "Z", 50),
        create_test_record("fourth", "D", "W", 50),
    ];

    sort_by_popularity(&mut records);

    // Equal scores keep their original relative order
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["second", "first", "third", "fourth"]);
}

#[test]
fn test_fetch_mode_display() {
    assert_eq!(FetchMode::Batch.to_string(), "batch");
    assert_eq!(FetchMode::Singleton.to_string(), "singleton");
}

#[test]
fn test_fetch_mode_default() {
    assert_eq!(FetchMode::default(), FetchMode::Batch);
}

#[test]
fn test_parse_fetch_mode_valid_inputs() {
    assert_eq!(parse_fetch_mode("batch").unwrap(), FetchMode::Batch);
    assert_eq!(parse_fetch_mode("singleton").unwrap(), FetchMode::Singleton);

    // alias and case insensitivity
    assert_eq!(parse_fetch_mode("single").unwrap(), FetchMode::Singleton);
    assert_eq!(parse_fetch_mode("BATCH").unwrap(), FetchMode::Batch);
    assert_eq!(parse_fetch_mode("  Singleton ").unwrap(), FetchMode::Singleton);
}

#[test]
fn test_parse_fetch_mode_invalid_inputs() {
    let result = parse_fetch_mode("");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    let result = parse_fetch_mode("parallel");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'parallel'"));
}
