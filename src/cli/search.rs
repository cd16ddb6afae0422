use tabled::Table;

use crate::{config, error, management::TokenManager, spotify, types::PopularityTableRow, warning};

/// Searches the catalog by track name and prints the matches with their
/// popularity, most relevant first.
pub async fn search(query: String, artist: Option<String>, limit: u32) {
    if let Err(e) = config::ensure_credentials() {
        error!("{}", e);
    }

    let mut token_mgr = match TokenManager::obtain().await {
        Ok(manager) => manager,
        Err(e) => {
            error!("Cannot authenticate against the Spotify API: {}", e);
        }
    };

    let token = token_mgr.get_valid_token().await;

    match spotify::tracks::search_track(&query, artist.as_deref(), &token, limit).await {
        Ok(tracks) => {
            if tracks.is_empty() {
                warning!("No tracks matched '{}'.", query);
                return;
            }

            let table_rows: Vec<PopularityTableRow> = tracks
                .into_iter()
                .enumerate()
                .map(|(i, t)| PopularityTableRow {
                    rank: i + 1,
                    name: t.name.clone(),
                    artist: t
                        .artists
                        .first()
                        .map(|a| a.name.clone())
                        .unwrap_or_default(),
                    popularity: t.popularity,
                    id: t.id,
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(e) => warning!("Search failed: {}", e),
    }
}
