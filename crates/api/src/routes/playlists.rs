//! Route definitions for `/playlists` and their songs.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::playlist;
use crate::state::AppState;

/// Playlist routes mounted at `/playlists`. Every mutation needs the admin key.
///
/// ```text
/// GET    /                                  -> list (with songs)
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id (with songs)
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// POST   /{id}/songs                        -> add_song
/// POST   /{id}/songs/bulk                   -> add_songs_bulk
/// PUT    /{playlist_id}/songs/{song_id}     -> update_song
/// DELETE /{playlist_id}/songs/{song_id}     -> delete_song
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(playlist::list).post(playlist::create))
        .route(
            "/{id}",
            get(playlist::get_by_id)
                .put(playlist::update)
                .delete(playlist::delete),
        )
        .route("/{id}/songs", post(playlist::add_song))
        .route("/{id}/songs/bulk", post(playlist::add_songs_bulk))
        .route(
            "/{id}/songs/{song_id}",
            put(playlist::update_song).delete(playlist::delete_song),
        )
}
