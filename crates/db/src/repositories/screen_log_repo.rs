//! Repository for the `screen_logs` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::screen::{ScreenLog, ScreenLogInput};

const COLUMNS: &str =
    "id, screen_id, rating, status, review, watched_on, created_at, updated_at";

/// Provides CRUD operations for watch logs.
pub struct ScreenLogRepo;

impl ScreenLogRepo {
    pub async fn create(
        pool: &PgPool,
        screen_id: DbId,
        input: &ScreenLogInput,
    ) -> Result<ScreenLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO screen_logs (screen_id, rating, status, review, watched_on) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ScreenLog>(&query)
            .bind(screen_id)
            .bind(input.rating)
            .bind(&input.status)
            .bind(&input.review)
            .bind(input.watched_on)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ScreenLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM screen_logs WHERE id = $1");
        sqlx::query_as::<_, ScreenLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Logs for one screen, most recently watched first.
    pub async fn list_by_screen(
        pool: &PgPool,
        screen_id: DbId,
    ) -> Result<Vec<ScreenLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM screen_logs WHERE screen_id = $1 \
             ORDER BY watched_on DESC, id DESC"
        );
        sqlx::query_as::<_, ScreenLog>(&query)
            .bind(screen_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<ScreenLog>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM screen_logs ORDER BY watched_on DESC, id DESC");
        sqlx::query_as::<_, ScreenLog>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ScreenLogInput,
    ) -> Result<Option<ScreenLog>, sqlx::Error> {
        let query = format!(
            "UPDATE screen_logs SET \
                rating = $2, status = $3, review = $4, watched_on = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ScreenLog>(&query)
            .bind(id)
            .bind(input.rating)
            .bind(&input.status)
            .bind(&input.review)
            .bind(input.watched_on)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<ScreenLog>, sqlx::Error> {
        let query = format!("DELETE FROM screen_logs WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, ScreenLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
