pub mod admin;
pub mod blogs;
pub mod games;
pub mod health;
pub mod logs;
pub mod playlists;
pub mod reads;
pub mod screens;
pub mod travels;

use axum::extract::OriginalUri;
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Reads are public. Mutations other than `POST /blogs` require the admin
/// key (see [`crate::middleware::api_key::RequireApiKey`]).
///
/// ```text
/// /blogs                                   list, create
/// /blogs/categories                        distinct categories
/// /blogs/archives                          month buckets
/// /blogs/category/{category}               list by category
/// /blogs/create                            create (key)
/// /blogs/from-file                         create from markdown (key)
/// /blogs/bulk-create                       create many (key)
/// /blogs/{id}                              get, update, delete
///
/// /logs                                    recent games feed
/// /logs/{type}                             feed by kind
///
/// /playlists                               list, create
/// /playlists/{id}                          get, update, delete
/// /playlists/{id}/songs                    append song
/// /playlists/{id}/songs/bulk               append many
/// /playlists/{id}/songs/{song_id}          update, delete song
///
/// /games | /screens | /reads | /travels    list, create
/// /{kind}/logs/all                         every log of the kind
/// /{kind}/logs/{id}                        get, update, delete log
/// /{kind}/{id}                             get, update, delete item
/// /{kind}/{id}/logs                        list, create logs
///
/// /admin/session                           verify admin key
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/blogs", blogs::router())
        .nest("/logs", logs::router())
        .nest("/playlists", playlists::router())
        .nest("/games", games::router())
        .nest("/screens", screens::router())
        .nest("/reads", reads::router())
        .nest("/travels", travels::router())
        .nest("/admin", admin::router())
        .fallback(api_not_found)
}

/// Unknown `/api` paths get a JSON 404 instead of reaching the frontend
/// fallback.
async fn api_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
