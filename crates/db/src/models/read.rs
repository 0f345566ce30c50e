//! Books and their reading logs.

use chrono::NaiveDate;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Read {
    pub id: DbId,
    pub title: String,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub cover_image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadInput {
    pub title: String,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub cover_image_url: Option<String>,
}

/// A row from the `read_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReadLog {
    pub id: DbId,
    pub read_id: DbId,
    pub rating: Option<i16>,
    pub status: Option<String>,
    pub review: Option<String>,
    pub finished_on: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadLogInput {
    pub rating: Option<i16>,
    pub status: Option<String>,
    pub review: Option<String>,
    pub finished_on: Option<NaiveDate>,
}
