use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{config, types::{SearchResponse, SeveralTracksResponse, Track}, warning};

/// Retrieves metadata for a single track from the Spotify Web API.
///
/// Fetches one track by its Spotify ID via `GET /tracks/{id}`. The function
/// handles rate limiting gracefully by respecting the `Retry-After` header
/// when encountering 429 Too Many Requests responses.
///
/// # Arguments
///
/// * `track_id` - Spotify ID of the track to fetch
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Track)` - Track metadata including name, artists and popularity
/// - `Err(reqwest::Error)` - Network error, missing/private track (404), or
///   any other HTTP error
///
/// # Rate Limiting
///
/// - Detects 429 Too Many Requests responses
/// - Reads the `Retry-After` header for the recommended delay
/// - Automatically waits and retries once for delays ≤ 120 seconds
/// - Issues a warning for excessive delays (> 120 seconds)
/// - A second 429 is propagated as an error so a persistently throttled
///   endpoint cannot stall the whole batch
pub async fn get_track(track_id: &str, token: &str) -> Result<Track, reqwest::Error> {
    let client = Client::new();
    let api_url = format!(
        "{uri}/tracks/{id}",
        uri = &config::spotify_apiurl(),
        id = track_id
    );

    let mut retried = false;

    loop {
        let response = client.get(&api_url).bearer_auth(token).send().await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS && !retried {
            if wait_for_retry_after(&response).await {
                retried = true;
                continue;
            }
        }

        let response = response.error_for_status()?;
        let json = response.json::<Track>().await?;
        return Ok(json);
    }
}

/// Retrieves metadata for multiple tracks in a single API request.
///
/// Fetches up to 50 tracks per call via `GET /tracks?ids=...`. This is far
/// cheaper than individual requests, but the endpoint has been flaky enough
/// in practice that the singleton path exists as a fallback.
///
/// # Arguments
///
/// * `track_ids` - Track IDs to fetch; the caller must chunk to ≤ 50
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(SeveralTracksResponse)` - One entry per requested ID; unknown or
///   removed IDs come back as `null` entries, not errors
/// - `Err(reqwest::Error)` - HTTP error, network error, or API error
///
/// # Retry Logic
///
/// Implements automatic retry for 502 Bad Gateway errors with a 10-second
/// delay, and honors `Retry-After` once on 429 responses; a second 429 is
/// propagated as an error. Other HTTP errors are propagated immediately to
/// the caller.
pub async fn get_several_tracks(
    track_ids: &[String],
    token: &str,
) -> Result<SeveralTracksResponse, reqwest::Error> {
    let ids = track_ids
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let api_url = format!(
        "{uri}/tracks?ids={ids}",
        uri = &config::spotify_apiurl(),
        ids = ids
    );

    let mut retried = false;

    loop {
        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => {
                if resp.status() == StatusCode::TOO_MANY_REQUESTS && !retried {
                    if wait_for_retry_after(&resp).await {
                        retried = true;
                        continue;
                    }
                }

                match resp.error_for_status() {
                    Ok(valid_response) => valid_response,
                    Err(err) => {
                        if let Some(status) = err.status() {
                            if status == StatusCode::BAD_GATEWAY {
                                sleep(Duration::from_secs(10)).await;
                                continue; // retry
                            }
                        }

                        return Err(err); // propagate other errors
                    }
                }
            }
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let json = response.json::<SeveralTracksResponse>().await?;
        return Ok(json);
    }
}

/// Searches the catalog for tracks by name, optionally narrowed by artist.
///
/// Uses `GET /search?type=track` with Spotify's field filter syntax, so a
/// query for "Levels" with artist "Avicii" becomes
/// `track:Levels artist:Avicii`.
///
/// # Arguments
///
/// * `query` - Track name to search for
/// * `artist` - Optional artist name to narrow the search
/// * `token` - Valid access token for Spotify API authentication
/// * `limit` - Maximum number of matches to return (1-50)
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Track>)` - Matching tracks ordered by Spotify's relevance
/// - `Err(reqwest::Error)` - Network error or HTTP error
pub async fn search_track(
    query: &str,
    artist: Option<&str>,
    token: &str,
    limit: u32,
) -> Result<Vec<Track>, reqwest::Error> {
    let q = match artist {
        Some(artist) => format!("track:{} artist:{}", query, artist),
        None => format!("track:{}", query),
    };

    let client = Client::new();
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .query(&[
            ("q", q.as_str()),
            ("type", "track"),
            ("limit", &limit.to_string()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<SearchResponse>().await?;

    Ok(json.tracks.items)
}

/// Sleeps for the duration announced in a 429 response's `Retry-After`
/// header. Returns true when the caller should retry the request.
async fn wait_for_retry_after(response: &reqwest::Response) -> bool {
    if let Some(retry_after) = response.headers().get("retry-after") {
        let retry_after = retry_after
            .to_str()
            .unwrap_or("0")
            .parse::<u64>()
            .unwrap_or(0);
        if retry_after <= 120 {
            sleep(Duration::from_secs(retry_after)).await;
            return true;
        }

        warning!(
            "Retry after has reached an abnormal high of {} seconds. Try again later.",
            retry_after
        );
    }

    false
}
