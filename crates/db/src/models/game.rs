//! Game catalog entries and their play logs.

use chrono::NaiveDate;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `games` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Game {
    pub id: DbId,
    pub title: String,
    pub platform: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub cover_image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Writable game fields. Create and full-overwrite update share this shape.
#[derive(Debug, Clone, Deserialize)]
pub struct GameInput {
    pub title: String,
    pub platform: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub cover_image_url: Option<String>,
}

/// A row from the `game_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GameLog {
    pub id: DbId,
    pub game_id: DbId,
    pub rating: Option<i16>,
    pub hours_played: Option<f64>,
    pub status: Option<String>,
    pub review: Option<String>,
    pub played_on: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Writable game-log fields. The parent game comes from the URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameLogInput {
    pub rating: Option<i16>,
    pub hours_played: Option<f64>,
    pub status: Option<String>,
    pub review: Option<String>,
    pub played_on: Option<NaiveDate>,
}
