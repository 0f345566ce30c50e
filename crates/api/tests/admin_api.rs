//! Tests for `/api/admin/session`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_with_key};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn session_with_valid_key_is_authenticated(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_with_key(app, "/api/admin/session").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["authenticated"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn session_without_key_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/admin/session").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Authentication required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn session_with_empty_query_key_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/admin/session?api_key=").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
