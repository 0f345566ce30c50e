//! Repository for the `playlists` table.

use std::collections::HashMap;

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::playlist::{Playlist, PlaylistInput, PlaylistSong, PlaylistWithSongs};
use crate::repositories::playlist_song_repo::SONG_COLUMNS;

const COLUMNS: &str = "id, name, description, spotify_url, youtube_music_url, created_at, updated_at";

/// Provides CRUD operations for playlists.
pub struct PlaylistRepo;

impl PlaylistRepo {
    pub async fn create(pool: &PgPool, input: &PlaylistInput) -> Result<Playlist, sqlx::Error> {
        let query = format!(
            "INSERT INTO playlists (name, description, spotify_url, youtube_music_url) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.spotify_url)
            .bind(&input.youtube_music_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Playlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playlists WHERE id = $1");
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Playlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playlists ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Playlist>(&query).fetch_all(pool).await
    }

    /// Every playlist with its songs, in two queries.
    pub async fn list_with_songs(pool: &PgPool) -> Result<Vec<PlaylistWithSongs>, sqlx::Error> {
        let playlists = Self::list(pool).await?;
        if playlists.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = playlists.iter().map(|p| p.id).collect();
        let query = format!(
            "SELECT {SONG_COLUMNS} FROM playlist_songs \
             WHERE playlist_id = ANY($1) \
             ORDER BY playlist_id, position, id"
        );
        let songs = sqlx::query_as::<_, PlaylistSong>(&query)
            .bind(&ids)
            .fetch_all(pool)
            .await?;

        let mut by_playlist: HashMap<DbId, Vec<PlaylistSong>> = HashMap::new();
        for song in songs {
            by_playlist.entry(song.playlist_id).or_default().push(song);
        }

        Ok(playlists
            .into_iter()
            .map(|playlist| {
                let songs = by_playlist.remove(&playlist.id).unwrap_or_default();
                PlaylistWithSongs { playlist, songs }
            })
            .collect())
    }

    /// One playlist with its songs, or `None` if it does not exist.
    pub async fn find_with_songs(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PlaylistWithSongs>, sqlx::Error> {
        let Some(playlist) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let query = format!(
            "SELECT {SONG_COLUMNS} FROM playlist_songs \
             WHERE playlist_id = $1 ORDER BY position, id"
        );
        let songs = sqlx::query_as::<_, PlaylistSong>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;
        Ok(Some(PlaylistWithSongs { playlist, songs }))
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PlaylistInput,
    ) -> Result<Option<Playlist>, sqlx::Error> {
        let query = format!(
            "UPDATE playlists SET \
                name = $2, description = $3, spotify_url = $4, youtube_music_url = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.spotify_url)
            .bind(&input.youtube_music_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a playlist. Its songs go with it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Playlist>, sqlx::Error> {
        let query = format!("DELETE FROM playlists WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
