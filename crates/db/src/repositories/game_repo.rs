//! Repository for the `games` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::game::{Game, GameInput};

const COLUMNS: &str =
    "id, title, platform, genre, release_year, cover_image_url, created_at, updated_at";

/// Provides CRUD operations for games.
pub struct GameRepo;

impl GameRepo {
    pub async fn create(pool: &PgPool, input: &GameInput) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (title, platform, genre, release_year, cover_image_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(&input.title)
            .bind(&input.platform)
            .bind(&input.genre)
            .bind(input.release_year)
            .bind(&input.cover_image_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all games, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Game>(&query).fetch_all(pool).await
    }

    /// Overwrite every writable column. Returns `None` if the game does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &GameInput,
    ) -> Result<Option<Game>, sqlx::Error> {
        let query = format!(
            "UPDATE games SET \
                title = $2, platform = $3, genre = $4, release_year = $5, cover_image_url = $6 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.platform)
            .bind(&input.genre)
            .bind(input.release_year)
            .bind(&input.cover_image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a game and, by cascade, all of its logs.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("DELETE FROM games WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
