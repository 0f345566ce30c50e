use axum::routing::get;
use axum::Router;

use crate::handlers::game;
use crate::state::AppState;

/// Game catalog and play log routes mounted at `/games`.
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
        .route("/", get(game::list).post(game::create))
        .route("/logs/all", get(game::list_all_logs))
        .route(
            "/logs/{id}",
            get(game::get_log)
                .put(game::update_log)
                .delete(game::delete_log),
        )
        .route(
            "/{id}",
            get(game::get_by_id).put(game::update).delete(game::delete),
        )
        .route("/{id}/logs", get(game::list_logs).post(game::create_log))
}
