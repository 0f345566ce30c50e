use axum::routing::get;
use axum::Router;

use crate::handlers::travel;
use crate::state::AppState;

/// Travel catalog and trip log routes mounted at `/travels`.
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
        .route("/", get(travel::list).post(travel::create))
        .route("/logs/all", get(travel::list_all_logs))
        .route(
            "/logs/{id}",
            get(travel::get_log)
                .put(travel::update_log)
                .delete(travel::delete_log),
        )
        .route(
            "/{id}",
            get(travel::get_by_id).put(travel::update).delete(travel::delete),
        )
        .route("/{id}/logs", get(travel::list_logs).post(travel::create_log))
}
