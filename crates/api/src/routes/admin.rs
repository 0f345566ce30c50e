use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Admin routes mounted at `/admin`.
///
/// ```text
/// GET /session   -> session (key)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/session", get(admin::session))
}
