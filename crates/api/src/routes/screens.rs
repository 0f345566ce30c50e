use axum::routing::get;
use axum::Router;

use crate::handlers::screen;
use crate::state::AppState;

/// Screen catalog and watch log routes mounted at `/screens`.
///
/// ```text
/// GET    /                 -> list (?type=movie|series)
/// POST   /                 -> create (key)
/// GET    /logs/all         -> list_all_logs
/// GET    /logs/{id}        -> get_log
/// PUT    /logs/{id}        -> update_log (key)
/// DELETE /logs/{id}        -> delete_log (key)
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update (key)
/// DELETE /{id}             -> delete (key)
/// GET    /{id}/logs        -> list_logs
/// POST   /{id}/logs        -> create_log (key)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(screen::list).post(screen::create))
        .route("/logs/all", get(screen::list_all_logs))
        .route(
            "/logs/{id}",
            get(screen::get_log)
                .put(screen::update_log)
                .delete(screen::delete_log),
        )
        .route(
            "/{id}",
            get(screen::get_by_id).put(screen::update).delete(screen::delete),
        )
        .route("/{id}/logs", get(screen::list_logs).post(screen::create_log))
}
