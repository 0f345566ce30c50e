//! Screen works (movies and series) and their watch logs.

use chrono::NaiveDate;
use folio_core::catalog::ScreenKind;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `screens` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Screen {
    pub id: DbId,
    pub title: String,
    /// `movie` or `series`; exposed to clients as `type`.
    #[serde(rename = "type")]
    pub kind: String,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub genre: Option<String>,
    pub cover_image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Writable screen fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ScreenInput {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ScreenKind,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub genre: Option<String>,
    pub cover_image_url: Option<String>,
}

/// A row from the `screen_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScreenLog {
    pub id: DbId,
    pub screen_id: DbId,
    pub rating: Option<i16>,
    pub status: Option<String>,
    pub review: Option<String>,
    pub watched_on: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Writable screen-log fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScreenLogInput {
    pub rating: Option<i16>,
    pub status: Option<String>,
    pub review: Option<String>,
    pub watched_on: Option<NaiveDate>,
}
