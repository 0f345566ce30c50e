//! Repository for the `travel_logs` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::travel::{TravelLog, TravelLogInput};

const COLUMNS: &str = "id, travel_id, start_date, end_date, rating, review, highlights, \
    visited_on, created_at, updated_at";

/// Provides CRUD operations for visit logs.
pub struct TravelLogRepo;

impl TravelLogRepo {
    pub async fn create(
        pool: &PgPool,
        travel_id: DbId,
        input: &TravelLogInput,
    ) -> Result<TravelLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO travel_logs \
                (travel_id, start_date, end_date, rating, review, highlights, visited_on) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TravelLog>(&query)
            .bind(travel_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.rating)
            .bind(&input.review)
            .bind(&input.highlights)
            .bind(input.visited_on)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TravelLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM travel_logs WHERE id = $1");
        sqlx::query_as::<_, TravelLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Visits to one destination, most recent first.
    pub async fn list_by_travel(
        pool: &PgPool,
        travel_id: DbId,
    ) -> Result<Vec<TravelLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM travel_logs WHERE travel_id = $1 \
             ORDER BY visited_on DESC, id DESC"
        );
        sqlx::query_as::<_, TravelLog>(&query)
            .bind(travel_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<TravelLog>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM travel_logs ORDER BY visited_on DESC, id DESC");
        sqlx::query_as::<_, TravelLog>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &TravelLogInput,
    ) -> Result<Option<TravelLog>, sqlx::Error> {
        let query = format!(
            "UPDATE travel_logs SET \
                start_date = $2, end_date = $3, rating = $4, review = $5, \
                highlights = $6, visited_on = $7 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TravelLog>(&query)
            .bind(id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.rating)
            .bind(&input.review)
            .bind(&input.highlights)
            .bind(input.visited_on)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<TravelLog>, sqlx::Error> {
        let query = format!("DELETE FROM travel_logs WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, TravelLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
