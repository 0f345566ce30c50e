//! Repository for the `travels` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::travel::{Travel, TravelInput};

const COLUMNS: &str =
    "id, destination, country, travel_type, cover_image_url, created_at, updated_at";

/// Provides CRUD operations for travel destinations.
pub struct TravelRepo;

impl TravelRepo {
    pub async fn create(pool: &PgPool, input: &TravelInput) -> Result<Travel, sqlx::Error> {
        let query = format!(
            "INSERT INTO travels (destination, country, travel_type, cover_image_url) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Travel>(&query)
            .bind(&input.destination)
            .bind(&input.country)
            .bind(&input.travel_type)
            .bind(&input.cover_image_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Travel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM travels WHERE id = $1");
        sqlx::query_as::<_, Travel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Travel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM travels ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Travel>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &TravelInput,
    ) -> Result<Option<Travel>, sqlx::Error> {
        let query = format!(
            "UPDATE travels SET \
                destination = $2, country = $3, travel_type = $4, cover_image_url = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Travel>(&query)
            .bind(id)
            .bind(&input.destination)
            .bind(&input.country)
            .bind(&input.travel_type)
            .bind(&input.cover_image_url)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Travel>, sqlx::Error> {
        let query = format!("DELETE FROM travels WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Travel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
