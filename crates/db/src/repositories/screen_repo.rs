//! Repository for the `screens` table.

use folio_core::catalog::ScreenKind;
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::screen::{Screen, ScreenInput};

const COLUMNS: &str =
    "id, title, kind, year, director, genre, cover_image_url, created_at, updated_at";

/// Provides CRUD operations for movies and series.
pub struct ScreenRepo;

impl ScreenRepo {
    pub async fn create(pool: &PgPool, input: &ScreenInput) -> Result<Screen, sqlx::Error> {
        let query = format!(
            "INSERT INTO screens (title, kind, year, director, genre, cover_image_url) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Screen>(&query)
            .bind(&input.title)
            .bind(input.kind.as_str())
            .bind(input.year)
            .bind(&input.director)
            .bind(&input.genre)
            .bind(&input.cover_image_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Screen>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM screens WHERE id = $1");
        sqlx::query_as::<_, Screen>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List screens, newest first, optionally only one kind.
    pub async fn list(
        pool: &PgPool,
        kind: Option<ScreenKind>,
    ) -> Result<Vec<Screen>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM screens \
             WHERE ($1::text IS NULL OR kind = $1) \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Screen>(&query)
            .bind(kind.map(ScreenKind::as_str))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ScreenInput,
    ) -> Result<Option<Screen>, sqlx::Error> {
        let query = format!(
            "UPDATE screens SET \
                title = $2, kind = $3, year = $4, director = $5, genre = $6, \
                cover_image_url = $7 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Screen>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.kind.as_str())
            .bind(input.year)
            .bind(&input.director)
            .bind(&input.genre)
            .bind(&input.cover_image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a screen and, by cascade, all of its logs.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Screen>, sqlx::Error> {
        let query = format!("DELETE FROM screens WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Screen>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
