use axum::routing::get;
use axum::Router;

use crate::handlers::logs;
use crate::state::AppState;

/// Activity feed routes mounted at `/logs`.
///
/// ```text
/// GET /          -> recent (latest games)
/// GET /{type}    -> by_kind (music, games, movies, series, books, travels)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(logs::recent))
        .route("/{kind}", get(logs::by_kind))
}
