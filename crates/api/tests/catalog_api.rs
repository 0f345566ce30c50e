//! HTTP-level integration tests for the catalog resources and their logs.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_with_key, get, post_json, post_json_with_key, put_json_with_key,
};
use serde_json::json;
use sqlx::PgPool;

async fn create(pool: &PgPool, uri: &str, body: serde_json::Value) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json_with_key(app, uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED, "POST {uri}");
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_game_crud_round_trip(pool: PgPool) {
    let game = create(
        &pool,
        "/api/games",
        json!({ "title": "Hades", "platform": "PC", "release_year": 2020 }),
    )
    .await;
    let id = game["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/games/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["platform"], "PC");

    let app = common::build_test_app(pool.clone());
    let response = put_json_with_key(
        app,
        &format!("/api/games/{id}"),
        json!({ "title": "Hades II", "platform": "PC" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "Hades II");

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/games").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_game_without_key_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/games", json!({ "title": "Celeste" })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_game_with_blank_title_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_with_key(app, "/api/games", json!({ "title": "  " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_game_removes_its_logs(pool: PgPool) {
    let game = create(&pool, "/api/games", json!({ "title": "Outer Wilds" })).await;
    let id = game["id"].as_i64().unwrap();
    let log = create(
        &pool,
        &format!("/api/games/{id}/logs"),
        json!({ "rating": 5, "status": "Finished", "played_on": "2024-03-01" }),
    )
    .await;
    let log_id = log["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_with_key(app, &format!("/api/games/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Game deleted");

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/games/logs/{log_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/games/logs/all").await;
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_log_rating_out_of_range_returns_400(pool: PgPool) {
    let game = create(&pool, "/api/games", json!({ "title": "Tetris" })).await;
    let id = game["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_with_key(app, &format!("/api/games/{id}/logs"), json!({ "rating": 6 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/games/{id}/logs")).await;
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_log_for_missing_game_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response =
        post_json_with_key(app, "/api/games/999999/logs", json!({ "rating": 3 })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_game_log_update_and_delete(pool: PgPool) {
    let game = create(&pool, "/api/games", json!({ "title": "Portal" })).await;
    let id = game["id"].as_i64().unwrap();
    let log = create(&pool, &format!("/api/games/{id}/logs"), json!({ "rating": 3 })).await;
    let log_id = log["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json_with_key(
        app,
        &format!("/api/games/logs/{log_id}"),
        json!({ "rating": 4, "hours_played": 6.5 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["rating"], 4);
    assert_eq!(json["hours_played"], 6.5);

    let app = common::build_test_app(pool.clone());
    let response = delete_with_key(app, &format!("/api/games/logs/{log_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = delete_with_key(app, &format!("/api/games/logs/{log_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Screens
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_screens_filter_by_type(pool: PgPool) {
    create(&pool, "/api/screens", json!({ "title": "Alien", "type": "movie" })).await;
    create(&pool, "/api/screens", json!({ "title": "Severance", "type": "series" })).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/screens?type=series").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let screens = json.as_array().unwrap();
    assert_eq!(screens.len(), 1);
    assert_eq!(screens[0]["title"], "Severance");
    assert_eq!(screens[0]["type"], "series");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/screens").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_screens_unknown_type_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/screens?type=podcast").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response =
        post_json_with_key(app, "/api/screens", json!({ "title": "X", "type": "podcast" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_read_logs_listed_per_book(pool: PgPool) {
    let book = create(&pool, "/api/reads", json!({ "title": "Dune", "author": "Herbert" })).await;
    let id = book["id"].as_i64().unwrap();
    create(
        &pool,
        &format!("/api/reads/{id}/logs"),
        json!({ "rating": 5, "finished_on": "2024-05-01" }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/reads/{id}/logs")).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["read_id"], id);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/reads/999999/logs").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

// ---------------------------------------------------------------------------
// Travels
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_travel_log_with_reversed_dates_returns_400(pool: PgPool) {
    let trip = create(&pool, "/api/travels", json!({ "destination": "Lisbon" })).await;
    let id = trip["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json_with_key(
        app,
        &format!("/api/travels/{id}/logs"),
        json!({ "start_date": "2024-06-10", "end_date": "2024-06-01" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let log = create(
        &pool,
        &format!("/api/travels/{id}/logs"),
        json!({ "start_date": "2024-06-01", "end_date": "2024-06-10", "rating": 4 }),
    )
    .await;
    assert_eq!(log["travel_id"], id);
}
