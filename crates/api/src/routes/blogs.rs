//! Route definitions for `/blogs`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{blog, blog_ingest};
use crate::state::AppState;

/// Blog routes mounted at `/blogs`.
///
/// ```text
/// GET    /                       -> list (filters, sort)
/// POST   /                       -> create (public)
/// GET    /categories             -> categories
/// GET    /archives               -> archives
/// GET    /category/{category}    -> list_by_category
/// POST   /create                 -> blog_ingest::create (key)
/// POST   /from-file              -> blog_ingest::from_file (key)
/// POST   /bulk-create            -> blog_ingest::bulk_create (key)
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update (key)
/// DELETE /{id}                   -> delete (key)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::list).post(blog::create))
        .route("/categories", get(blog::categories))
        .route("/archives", get(blog::archives))
        .route("/category/{category}", get(blog::list_by_category))
        .route("/create", post(blog_ingest::create))
        .route("/from-file", post(blog_ingest::from_file))
        .route("/bulk-create", post(blog_ingest::bulk_create))
        .route(
            "/{id}",
            get(blog::get_by_id).put(blog::update).delete(blog::delete),
        )
}
