//! Repository for the `reads` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::read::{Read, ReadInput};

const COLUMNS: &str = "id, title, author, year, genre, cover_image_url, created_at, updated_at";

/// Provides CRUD operations for books.
pub struct ReadRepo;

impl ReadRepo {
    pub async fn create(pool: &PgPool, input: &ReadInput) -> Result<Read, sqlx::Error> {
        let query = format!(
            "INSERT INTO reads (title, author, year, genre, cover_image_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Read>(&query)
            .bind(&input.title)
            .bind(&input.author)
            .bind(input.year)
            .bind(&input.genre)
            .bind(&input.cover_image_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Read>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reads WHERE id = $1");
        sqlx::query_as::<_, Read>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Read>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reads ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Read>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ReadInput,
    ) -> Result<Option<Read>, sqlx::Error> {
        let query = format!(
            "UPDATE reads SET \
                title = $2, author = $3, year = $4, genre = $5, cover_image_url = $6 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Read>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(input.year)
            .bind(&input.genre)
            .bind(&input.cover_image_url)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Read>, sqlx::Error> {
        let query = format!("DELETE FROM reads WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Read>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
