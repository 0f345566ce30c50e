//! Repository for the `read_logs` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::read::{ReadLog, ReadLogInput};

const COLUMNS: &str = "id, read_id, rating, status, review, finished_on, created_at, updated_at";

/// Provides CRUD operations for reading logs.
pub struct ReadLogRepo;

impl ReadLogRepo {
    pub async fn create(
        pool: &PgPool,
        read_id: DbId,
        input: &ReadLogInput,
    ) -> Result<ReadLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO read_logs (read_id, rating, status, review, finished_on) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReadLog>(&query)
            .bind(read_id)
            .bind(input.rating)
            .bind(&input.status)
            .bind(&input.review)
            .bind(input.finished_on)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ReadLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM read_logs WHERE id = $1");
        sqlx::query_as::<_, ReadLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Logs for one book, most recently finished first.
    pub async fn list_by_read(pool: &PgPool, read_id: DbId) -> Result<Vec<ReadLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM read_logs WHERE read_id = $1 \
             ORDER BY finished_on DESC, id DESC"
        );
        sqlx::query_as::<_, ReadLog>(&query)
            .bind(read_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<ReadLog>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM read_logs ORDER BY finished_on DESC, id DESC");
        sqlx::query_as::<_, ReadLog>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ReadLogInput,
    ) -> Result<Option<ReadLog>, sqlx::Error> {
        let query = format!(
            "UPDATE read_logs SET \
                rating = $2, status = $3, review = $4, finished_on = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReadLog>(&query)
            .bind(id)
            .bind(input.rating)
            .bind(&input.status)
            .bind(&input.review)
            .bind(input.finished_on)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<ReadLog>, sqlx::Error> {
        let query = format!("DELETE FROM read_logs WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, ReadLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
