//! Playlists and their ordered songs.

use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `playlists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Playlist {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub spotify_url: Option<String>,
    pub youtube_music_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Writable playlist fields, already trimmed and validated.
#[derive(Debug, Clone)]
pub struct PlaylistInput {
    pub name: String,
    pub description: Option<String>,
    pub spotify_url: Option<String>,
    pub youtube_music_url: Option<String>,
}

/// A playlist together with its songs in position order.
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistWithSongs {
    #[serde(flatten)]
    pub playlist: Playlist,
    pub songs: Vec<PlaylistSong>,
}

/// A row from the `playlist_songs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlaylistSong {
    pub id: DbId,
    pub playlist_id: DbId,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<i32>,
    pub position: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A song to append. Position is assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewPlaylistSong {
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub year: Option<i32>,
}
