use axum::routing::get;
use axum::Router;

use crate::handlers::read;
use crate::state::AppState;

/// Read catalog and reading log routes mounted at `/reads`.
///
/// ```text
/// GET    /                 -> list
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
        .route("/", get(read::list).post(read::create))
        .route("/logs/all", get(read::list_all_logs))
        .route(
            "/logs/{id}",
            get(read::get_log)
                .put(read::update_log)
                .delete(read::delete_log),
        )
        .route(
            "/{id}",
            get(read::get_by_id).put(read::update).delete(read::delete),
        )
        .route("/{id}/logs", get(read::list_logs).post(read::create_log))
}
