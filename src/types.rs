use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// A successfully resolved track. Created only when a lookup succeeds and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub popularity: u8,
}

#[derive(Tabled)]
pub struct PopularityTableRow {
    pub rank: usize,
    pub name: String,
    pub artist: String,
    pub popularity: u8,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub popularity: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: String,
    pub name: String,
}

/// Response of `GET /tracks?ids=...`. Unknown or removed IDs come back as
/// `null` entries, hence the inner `Option`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralTracksResponse {
    pub tracks: Vec<Option<Track>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: SearchTracksContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracksContainer {
    pub items: Vec<Track>,
}

impl From<Track> for TrackRecord {
    fn from(track: Track) -> Self {
        let artist = track
            .artists
            .first()
            .map(|a| a.name.clone())
            .unwrap_or_default();
        TrackRecord {
            id: track.id,
            name: track.name,
            artist,
            popularity: track.popularity,
        }
    }
}
