//! HTTP-level integration tests for `/api/playlists` and the admin key gate.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_with_key, get, post_json, post_json_with_custom_key, post_json_with_key,
    put_json_with_key, TEST_API_KEY,
};
use serde_json::json;
use sqlx::PgPool;

async fn create_playlist(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_with_key(app, "/api/playlists", json!({ "name": name })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn playlist_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM playlists")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Admin key gate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_without_key_returns_401_and_writes_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/playlists", json!({ "name": "Sneaky" })).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
    assert_eq!(playlist_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_wrong_key_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response =
        post_json_with_custom_key(app, "/api/playlists", "not-the-key", json!({ "name": "X" }))
            .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid credentials");
    assert_eq!(playlist_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_api_key_query_parameter_is_accepted(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/playlists?api_key={TEST_API_KEY}"),
        json!({ "name": "Via query" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(playlist_count(&pool).await, 1);
}

// ---------------------------------------------------------------------------
// Playlists
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_trims_name_and_rejects_blank(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json_with_key(app, "/api/playlists", json!({ "name": "   " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json_with_key(
        app,
        "/api/playlists",
        json!({ "name": "  Road Trip  ", "description": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Road Trip");
    assert!(json["description"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_playlist_includes_songs_in_order(pool: PgPool) {
    let id = create_playlist(&pool, "Mix").await;

    for title in ["First", "Second"] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_with_key(
            app,
            &format!("/api/playlists/{id}/songs"),
            json!({ "title": title, "artist": "Band" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/playlists/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Mix");
    let songs = json["songs"].as_array().unwrap();
    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0]["title"], "First");
    assert_eq!(songs[0]["position"], 0);
    assert_eq!(songs[1]["position"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_and_delete_playlist(pool: PgPool) {
    let id = create_playlist(&pool, "Old").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_with_key(
        app,
        &format!("/api/playlists/{id}"),
        json!({ "name": "New", "spotify_url": "https://open.spotify.com/x" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "New");

    let app = common::build_test_app(pool.clone());
    let response = delete_with_key(app, &format!("/api/playlists/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Playlist deleted");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/playlists/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Songs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_song_to_missing_playlist_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_with_key(
        app,
        "/api/playlists/999999/songs",
        json!({ "title": "Orphan", "artist": "Nobody" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_song_without_artist_returns_400(pool: PgPool) {
    let id = create_playlist(&pool, "Mix").await;

    let app = common::build_test_app(pool);
    let response = post_json_with_key(
        app,
        &format!("/api/playlists/{id}/songs"),
        json!({ "title": "Untitled" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bulk_add_skips_malformed_entries(pool: PgPool) {
    let id = create_playlist(&pool, "Bulk").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_with_key(
        app,
        &format!("/api/playlists/{id}/songs/bulk"),
        json!({
            "songs": [
                { "title": "One", "artist": "A" },
                { "title": "No artist" },
                "not an object",
                { "title": "Four", "artist": "B", "album": "LP" }
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    let positions: Vec<i64> = json["songs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["position"].as_i64().unwrap())
        .collect();
    assert_eq!(positions, vec![0, 1]);
    let skipped: Vec<i64> = json["skipped"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["index"].as_i64().unwrap())
        .collect();
    assert_eq!(skipped, vec![1, 2]);

    let stored: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM playlist_songs WHERE playlist_id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bulk_add_requires_songs(pool: PgPool) {
    let id = create_playlist(&pool, "Bulk").await;

    let app = common::build_test_app(pool);
    let response = post_json_with_key(
        app,
        &format!("/api/playlists/{id}/songs/bulk"),
        json!({ "songs": [] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Songs array is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_song_is_only_reachable_through_its_playlist(pool: PgPool) {
    let owner = create_playlist(&pool, "Owner").await;
    let other = create_playlist(&pool, "Other").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_with_key(
        app,
        &format!("/api/playlists/{owner}/songs"),
        json!({ "title": "Kept", "artist": "Band" }),
    )
    .await;
    let song_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_with_key(app, &format!("/api/playlists/{other}/songs/{song_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = put_json_with_key(
        app,
        &format!("/api/playlists/{owner}/songs/{song_id}"),
        json!({ "title": "Renamed", "artist": "Band", "year": 2001 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "Renamed");

    let app = common::build_test_app(pool.clone());
    let response = delete_with_key(app, &format!("/api/playlists/{owner}/songs/{song_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Song deleted");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/playlists/{owner}")).await;
    assert_eq!(body_json(response).await["songs"], json!([]));
}
