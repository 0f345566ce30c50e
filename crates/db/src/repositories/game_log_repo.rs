//! Repository for the `game_logs` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::game::{GameLog, GameLogInput};

/// `hours_played` is NUMERIC in storage and read back as float8.
const COLUMNS: &str = "id, game_id, rating, hours_played::float8 AS hours_played, status, \
    review, played_on, created_at, updated_at";

/// Provides CRUD operations for game play logs.
pub struct GameLogRepo;

impl GameLogRepo {
    pub async fn create(
        pool: &PgPool,
        game_id: DbId,
        input: &GameLogInput,
    ) -> Result<GameLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO game_logs (game_id, rating, hours_played, status, review, played_on) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GameLog>(&query)
            .bind(game_id)
            .bind(input.rating)
            .bind(input.hours_played)
            .bind(&input.status)
            .bind(&input.review)
            .bind(input.played_on)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GameLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM game_logs WHERE id = $1");
        sqlx::query_as::<_, GameLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Logs for one game, most recently played first (undated logs lead).
    pub async fn list_by_game(pool: &PgPool, game_id: DbId) -> Result<Vec<GameLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM game_logs WHERE game_id = $1 ORDER BY played_on DESC, id DESC"
        );
        sqlx::query_as::<_, GameLog>(&query)
            .bind(game_id)
            .fetch_all(pool)
            .await
    }

    /// Every game log, most recently played first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<GameLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM game_logs ORDER BY played_on DESC, id DESC");
        sqlx::query_as::<_, GameLog>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &GameLogInput,
    ) -> Result<Option<GameLog>, sqlx::Error> {
        let query = format!(
            "UPDATE game_logs SET \
                rating = $2, hours_played = $3, status = $4, review = $5, played_on = $6 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GameLog>(&query)
            .bind(id)
            .bind(input.rating)
            .bind(input.hours_played)
            .bind(&input.status)
            .bind(&input.review)
            .bind(input.played_on)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<GameLog>, sqlx::Error> {
        let query = format!("DELETE FROM game_logs WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, GameLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
