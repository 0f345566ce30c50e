//! Repository for the `playlist_songs` table.
//!
//! Positions are assigned on append as one past the current maximum for the
//! playlist, starting at 0. Gaps left by deletes are never filled.

use folio_core::playlist::next_position;
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::playlist::{NewPlaylistSong, PlaylistSong};

pub(crate) const SONG_COLUMNS: &str =
    "id, playlist_id, title, artist, album, year, position, created_at, updated_at";

/// Provides append, update, and delete operations for playlist songs.
pub struct PlaylistSongRepo;

impl PlaylistSongRepo {
    /// Append one song at the end of a playlist.
    pub async fn append(
        pool: &PgPool,
        playlist_id: DbId,
        song: &NewPlaylistSong,
    ) -> Result<PlaylistSong, sqlx::Error> {
        let query = format!(
            "INSERT INTO playlist_songs (playlist_id, title, artist, album, year, position) \
             SELECT $1, $2, $3, $4, $5, COALESCE(MAX(position) + 1, 0) \
             FROM playlist_songs WHERE playlist_id = $1 \
             RETURNING {SONG_COLUMNS}"
        );
        sqlx::query_as::<_, PlaylistSong>(&query)
            .bind(playlist_id)
            .bind(&song.title)
            .bind(&song.artist)
            .bind(&song.album)
            .bind(song.year)
            .fetch_one(pool)
            .await
    }

    /// Append a batch of songs with consecutive positions, all or nothing.
    ///
    /// The parent playlist row is locked for the duration so two concurrent
    /// batches cannot be handed the same positions.
    pub async fn append_many(
        pool: &PgPool,
        playlist_id: DbId,
        songs: &[NewPlaylistSong],
    ) -> Result<Vec<PlaylistSong>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT id FROM playlists WHERE id = $1 FOR UPDATE")
            .bind(playlist_id)
            .fetch_one(&mut *tx)
            .await?;

        let current_max: Option<i32> =
            sqlx::query_scalar("SELECT MAX(position) FROM playlist_songs WHERE playlist_id = $1")
                .bind(playlist_id)
                .fetch_one(&mut *tx)
                .await?;
        let mut position = next_position(current_max);

        let query = format!(
            "INSERT INTO playlist_songs (playlist_id, title, artist, album, year, position) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {SONG_COLUMNS}"
        );
        let mut inserted = Vec::with_capacity(songs.len());
        for song in songs {
            let row = sqlx::query_as::<_, PlaylistSong>(&query)
                .bind(playlist_id)
                .bind(&song.title)
                .bind(&song.artist)
                .bind(&song.album)
                .bind(song.year)
                .bind(position)
                .fetch_one(&mut *tx)
                .await?;
            inserted.push(row);
            position += 1;
        }

        tx.commit().await?;
        Ok(inserted)
    }

    pub async fn list_by_playlist(
        pool: &PgPool,
        playlist_id: DbId,
    ) -> Result<Vec<PlaylistSong>, sqlx::Error> {
        let query = format!(
            "SELECT {SONG_COLUMNS} FROM playlist_songs \
             WHERE playlist_id = $1 ORDER BY position, id"
        );
        sqlx::query_as::<_, PlaylistSong>(&query)
            .bind(playlist_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a song's fields. Position is left untouched.
    pub async fn update(
        pool: &PgPool,
        playlist_id: DbId,
        song_id: DbId,
        song: &NewPlaylistSong,
    ) -> Result<Option<PlaylistSong>, sqlx::Error> {
        let query = format!(
            "UPDATE playlist_songs SET title = $3, artist = $4, album = $5, year = $6 \
             WHERE playlist_id = $1 AND id = $2 \
             RETURNING {SONG_COLUMNS}"
        );
        sqlx::query_as::<_, PlaylistSong>(&query)
            .bind(playlist_id)
            .bind(song_id)
            .bind(&song.title)
            .bind(&song.artist)
            .bind(&song.album)
            .bind(song.year)
            .fetch_optional(pool)
            .await
    }

    /// Delete a song, but only if it belongs to `playlist_id`.
    pub async fn delete_from_playlist(
        pool: &PgPool,
        playlist_id: DbId,
        song_id: DbId,
    ) -> Result<Option<PlaylistSong>, sqlx::Error> {
        let query = format!(
            "DELETE FROM playlist_songs WHERE playlist_id = $1 AND id = $2 \
             RETURNING {SONG_COLUMNS}"
        );
        sqlx::query_as::<_, PlaylistSong>(&query)
            .bind(playlist_id)
            .bind(song_id)
            .fetch_optional(pool)
            .await
    }
}
