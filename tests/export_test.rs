use spopcli::export::{CSV_FILE_NAME, CSV_HEADER, render_csv, write_csv};
use spopcli::types::TrackRecord;

fn create_test_record(id: &str, name: &str, artist: &str, popularity: u8) -> TrackRecord {
    TrackRecord {
        id: id.to_string(),
        name: name.to_string(),
        artist: artist.to_string(),
        popularity,
    }
}

#[test]
fn test_render_csv_header_only_for_empty_set() {
    let csv = render_csv(&[]).unwrap();

    assert_eq!(csv.trim_end(), "Rank,Song Name,Artist,Popularity,Spotify ID");
}

#[test]
fn test_render_csv_rows_and_ranks() {
    let records = vec![
        create_test_record("id1", "Song One", "Artist A", 90),
        create_test_record("id2", "Song Two", "Artist B", 45),
    ];

    let csv = render_csv(&records).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "1,Song One,Artist A,90,id1");
    assert_eq!(lines[2], "2,Song Two,Artist B,45,id2");
}

#[test]
fn test_render_csv_quotes_delimiter_in_values() {
    let records = vec![create_test_record(
        "id1",
        "Hello, World",
        "Quote \"Me\"",
        77,
    )];

    let csv = render_csv(&records).unwrap();

    // fields containing the delimiter or quotes must be quoted
    assert!(csv.contains("\"Hello, World\""));
    assert!(csv.contains("\"Quote \"\"Me\"\"\""));
}

#[test]
fn test_csv_round_trip() {
    let records = vec![
        create_test_record("id1", "Song, with comma", "Artist A", 90),
        create_test_record("id2", "Plain Song", "Artist B", 45),
        create_test_record("id3", "Third", "Artist C", 45),
    ];

    let csv = render_csv(&records).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv.as_bytes());

    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADER.to_vec());

    let mut recovered = Vec::new();
    for result in reader.records() {
        let row = result.unwrap();
        recovered.push(create_test_record(
            &row[4],
            &row[1],
            &row[2],
            row[3].parse::<u8>().unwrap(),
        ));
    }

    // Parsing the exported file recovers exactly the rendered tuples
    assert_eq!(recovered, records);
}

#[test]
fn test_csv_file_name_is_fixed() {
    assert_eq!(CSV_FILE_NAME, "popularity_results.csv");
}

#[tokio::test]
async fn test_write_csv_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CSV_FILE_NAME);

    let records = vec![create_test_record("id1", "Song One", "Artist A", 55)];
    write_csv(&records, &path).await.unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Rank,Song Name,Artist,Popularity,Spotify ID"));
    assert!(content.contains("1,Song One,Artist A,55,id1"));
}
