//! Handlers for `/playlists` and their songs.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::playlist::{validate_playlist_name, validate_song};
use folio_core::types::DbId;
use folio_db::models::playlist::{
    NewPlaylistSong, Playlist, PlaylistInput, PlaylistSong, PlaylistWithSongs,
};
use folio_db::repositories::{PlaylistRepo, PlaylistSongRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::api_key::RequireApiKey;
use crate::response::{BulkSongsCreated, MessageResponse, SkippedEntry};
use crate::state::AppState;

fn playlist_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Playlist",
        id,
    })
}

fn song_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Song", id })
}

/// Trimmed, with blank strings treated as absent.
fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct PlaylistPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub spotify_url: Option<String>,
    pub youtube_music_url: Option<String>,
}

impl PlaylistPayload {
    fn into_input(self) -> Result<PlaylistInput, CoreError> {
        validate_playlist_name(self.name.as_deref())?;
        Ok(PlaylistInput {
            name: self.name.unwrap_or_default().trim().to_string(),
            description: clean(self.description),
            spotify_url: clean(self.spotify_url),
            youtube_music_url: clean(self.youtube_music_url),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SongPayload {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<i32>,
}

impl SongPayload {
    fn into_new_song(self) -> Result<NewPlaylistSong, CoreError> {
        validate_song(self.title.as_deref(), self.artist.as_deref())?;
        Ok(NewPlaylistSong {
            title: self.title.unwrap_or_default().trim().to_string(),
            artist: self.artist.unwrap_or_default().trim().to_string(),
            album: clean(self.album),
            year: self.year,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct BulkSongsPayload {
    pub songs: Option<Vec<serde_json::Value>>,
}

/// Split raw bulk entries into valid songs and skipped indices.
fn partition_songs(entries: Vec<serde_json::Value>) -> (Vec<NewPlaylistSong>, Vec<SkippedEntry>) {
    let mut valid = Vec::new();
    let mut skipped = Vec::new();
    for (index, entry) in entries.into_iter().enumerate() {
        let parsed = serde_json::from_value::<SongPayload>(entry)
            .map_err(|e| e.to_string())
            .and_then(|payload| payload.into_new_song().map_err(|e| e.to_string()));
        match parsed {
            Ok(song) => valid.push(song),
            Err(reason) => skipped.push(SkippedEntry { index, reason }),
        }
    }
    (valid, skipped)
}

async fn ensure_playlist(state: &AppState, id: DbId) -> AppResult<Playlist> {
    PlaylistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| playlist_not_found(id))
}

// ---------------------------------------------------------------------------
// Playlists
// ---------------------------------------------------------------------------

/// GET /api/playlists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PlaylistWithSongs>>> {
    Ok(Json(PlaylistRepo::list_with_songs(&state.pool).await?))
}

/// GET /api/playlists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<PlaylistWithSongs>> {
    let playlist = PlaylistRepo::find_with_songs(&state.pool, id)
        .await?
        .ok_or_else(|| playlist_not_found(id))?;
    Ok(Json(playlist))
}

/// POST /api/playlists
pub async fn create(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppJson(payload): AppJson<PlaylistPayload>,
) -> AppResult<(StatusCode, Json<Playlist>)> {
    let input = payload.into_input()?;
    let playlist = PlaylistRepo::create(&state.pool, &input).await?;
    tracing::info!(playlist_id = playlist.id, name = %playlist.name, "Playlist created");
    Ok((StatusCode::CREATED, Json(playlist)))
}

/// PUT /api/playlists/{id}
pub async fn update(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(payload): AppJson<PlaylistPayload>,
) -> AppResult<Json<Playlist>> {
    let input = payload.into_input()?;
    let playlist = PlaylistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| playlist_not_found(id))?;
    Ok(Json(playlist))
}

/// DELETE /api/playlists/{id}
pub async fn delete(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    PlaylistRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| playlist_not_found(id))?;
    tracing::info!(playlist_id = id, "Playlist deleted");
    Ok(Json(MessageResponse::new("Playlist deleted")))
}

// ---------------------------------------------------------------------------
// Songs
// ---------------------------------------------------------------------------

/// POST /api/playlists/{id}/songs
pub async fn add_song(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(playlist_id): AppPath<DbId>,
    AppJson(payload): AppJson<SongPayload>,
) -> AppResult<(StatusCode, Json<PlaylistSong>)> {
    let song = payload.into_new_song()?;
    ensure_playlist(&state, playlist_id).await?;
    let song = PlaylistSongRepo::append(&state.pool, playlist_id, &song).await?;
    tracing::info!(playlist_id, song_id = song.id, position = song.position, "Song added");
    Ok((StatusCode::CREATED, Json(song)))
}

/// POST /api/playlists/{id}/songs/bulk
///
/// Malformed entries are skipped and reported; the rest are appended with
/// consecutive positions in one transaction.
pub async fn add_songs_bulk(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(playlist_id): AppPath<DbId>,
    AppJson(payload): AppJson<BulkSongsPayload>,
) -> AppResult<(StatusCode, Json<BulkSongsCreated>)> {
    let entries = payload
        .songs
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("Songs array is required".into()))?;
    ensure_playlist(&state, playlist_id).await?;

    let (valid, skipped) = partition_songs(entries);
    let songs = PlaylistSongRepo::append_many(&state.pool, playlist_id, &valid).await?;
    tracing::info!(
        playlist_id,
        added = songs.len(),
        skipped = skipped.len(),
        "Bulk songs added"
    );

    Ok((
        StatusCode::CREATED,
        Json(BulkSongsCreated {
            count: songs.len(),
            songs,
            skipped,
        }),
    ))
}

/// PUT /api/playlists/{playlist_id}/songs/{song_id}
pub async fn update_song(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath((playlist_id, song_id)): AppPath<(DbId, DbId)>,
    AppJson(payload): AppJson<SongPayload>,
) -> AppResult<Json<PlaylistSong>> {
    let song = payload.into_new_song()?;
    let song = PlaylistSongRepo::update(&state.pool, playlist_id, song_id, &song)
        .await?
        .ok_or_else(|| song_not_found(song_id))?;
    Ok(Json(song))
}

/// DELETE /api/playlists/{playlist_id}/songs/{song_id}
///
/// A song addressed through a playlist it does not belong to is a 404 and
/// is left in place.
pub async fn delete_song(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath((playlist_id, song_id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    PlaylistSongRepo::delete_from_playlist(&state.pool, playlist_id, song_id)
        .await?
        .ok_or_else(|| song_not_found(song_id))?;
    tracing::info!(playlist_id, song_id, "Song deleted");
    Ok(Json(MessageResponse::new("Song deleted")))
}
