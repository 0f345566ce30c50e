//! Integration tests for the media catalog and its logs.

use assert_matches::assert_matches;
use chrono::NaiveDate;
use folio_core::catalog::ScreenKind;
use folio_db::models::game::{GameInput, GameLogInput};
use folio_db::models::read::{ReadInput, ReadLogInput};
use folio_db::models::screen::{ScreenInput, ScreenLogInput};
use folio_db::models::travel::{TravelInput, TravelLogInput};
use folio_db::repositories::{
    GameLogRepo, GameRepo, ReadLogRepo, ReadRepo, ScreenLogRepo, ScreenRepo, TravelLogRepo,
    TravelRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_game(title: &str) -> GameInput {
    GameInput {
        title: title.to_string(),
        platform: Some("PC".to_string()),
        genre: None,
        release_year: Some(2017),
        cover_image_url: None,
    }
}

fn game_log(rating: Option<i16>, played_on: Option<&str>) -> GameLogInput {
    GameLogInput {
        rating,
        hours_played: Some(12.5),
        status: Some("Finished".to_string()),
        review: None,
        played_on: played_on.map(|d| d.parse::<NaiveDate>().unwrap()),
    }
}

fn new_screen(title: &str, kind: ScreenKind) -> ScreenInput {
    ScreenInput {
        title: title.to_string(),
        kind,
        year: None,
        director: None,
        genre: None,
        cover_image_url: None,
    }
}

fn is_check_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23514"))
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_game_log_roundtrip_keeps_fractional_hours(pool: PgPool) {
    let game = GameRepo::create(&pool, &new_game("Celeste")).await.unwrap();
    let log = GameLogRepo::create(&pool, game.id, &game_log(Some(5), Some("2024-02-01")))
        .await
        .unwrap();
    assert_eq!(log.game_id, game.id);
    assert_eq!(log.hours_played, Some(12.5));
    assert_eq!(log.rating, Some(5));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_game_removes_its_logs(pool: PgPool) {
    let game = GameRepo::create(&pool, &new_game("Hades")).await.unwrap();
    let first = GameLogRepo::create(&pool, game.id, &game_log(Some(4), None)).await.unwrap();
    let second = GameLogRepo::create(&pool, game.id, &game_log(Some(5), None)).await.unwrap();

    let deleted = GameRepo::delete(&pool, game.id).await.unwrap();
    assert_matches!(deleted, Some(_));

    assert!(GameLogRepo::list_by_game(&pool, game.id).await.unwrap().is_empty());
    assert!(GameLogRepo::find_by_id(&pool, first.id).await.unwrap().is_none());
    assert!(GameLogRepo::find_by_id(&pool, second.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rating_out_of_range_is_rejected_by_storage(pool: PgPool) {
    let game = GameRepo::create(&pool, &new_game("Outer Wilds")).await.unwrap();
    let err = GameLogRepo::create(&pool, game.id, &game_log(Some(6), None))
        .await
        .unwrap_err();
    assert!(is_check_violation(&err), "expected check violation, got {err:?}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logs_for_game_are_newest_first(pool: PgPool) {
    let game = GameRepo::create(&pool, &new_game("Tunic")).await.unwrap();
    let older = GameLogRepo::create(&pool, game.id, &game_log(Some(3), Some("2023-01-01")))
        .await
        .unwrap();
    let newer = GameLogRepo::create(&pool, game.id, &game_log(Some(4), Some("2024-01-01")))
        .await
        .unwrap();

    let logs = GameLogRepo::list_by_game(&pool, game.id).await.unwrap();
    let ids: Vec<i64> = logs.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_log_for_missing_game_is_fk_violation(pool: PgPool) {
    let err = GameLogRepo::create(&pool, 999_999, &game_log(None, None))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        sqlx::Error::Database(ref db) if db.code().as_deref() == Some("23503")
    );
}

// ---------------------------------------------------------------------------
// Screens, reads, travels
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_screen_list_filters_by_kind(pool: PgPool) {
    ScreenRepo::create(&pool, &new_screen("Alien", ScreenKind::Movie)).await.unwrap();
    ScreenRepo::create(&pool, &new_screen("Dark", ScreenKind::Series)).await.unwrap();

    let movies = ScreenRepo::list(&pool, Some(ScreenKind::Movie)).await.unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].kind, "movie");

    let all = ScreenRepo::list(&pool, None).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_screen_log_update_and_delete(pool: PgPool) {
    let screen = ScreenRepo::create(&pool, &new_screen("Heat", ScreenKind::Movie)).await.unwrap();
    let log = ScreenLogRepo::create(&pool, screen.id, &ScreenLogInput::default())
        .await
        .unwrap();

    let input = ScreenLogInput {
        rating: Some(4),
        status: Some("Watched".to_string()),
        ..Default::default()
    };
    let updated = ScreenLogRepo::update(&pool, log.id, &input)
        .await
        .unwrap()
        .expect("log should exist");
    assert_eq!(updated.rating, Some(4));

    assert_matches!(ScreenLogRepo::delete(&pool, log.id).await.unwrap(), Some(_));
    assert!(ScreenLogRepo::list_all(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_read_logs_cascade_with_book(pool: PgPool) {
    let book = ReadRepo::create(
        &pool,
        &ReadInput {
            title: "Dune".to_string(),
            author: Some("Frank Herbert".to_string()),
            year: Some(1965),
            genre: None,
            cover_image_url: None,
        },
    )
    .await
    .unwrap();
    ReadLogRepo::create(&pool, book.id, &ReadLogInput::default()).await.unwrap();

    ReadRepo::delete(&pool, book.id).await.unwrap();
    assert!(ReadLogRepo::list_by_read(&pool, book.id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_travel_log_rejects_inverted_date_range(pool: PgPool) {
    let trip = TravelRepo::create(
        &pool,
        &TravelInput {
            destination: "Kyoto".to_string(),
            country: Some("Japan".to_string()),
            travel_type: None,
            cover_image_url: None,
        },
    )
    .await
    .unwrap();

    let input = TravelLogInput {
        start_date: Some(NaiveDate::from_ymd_opt(2024, 4, 10).unwrap()),
        end_date: Some(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()),
        ..Default::default()
    };
    let err = TravelLogRepo::create(&pool, trip.id, &input).await.unwrap_err();
    assert!(is_check_violation(&err), "expected check violation, got {err:?}");
}
