//! Travel destinations and visit logs.

use chrono::NaiveDate;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `travels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Travel {
    pub id: DbId,
    pub destination: String,
    pub country: Option<String>,
    pub travel_type: Option<String>,
    pub cover_image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TravelInput {
    pub destination: String,
    pub country: Option<String>,
    pub travel_type: Option<String>,
    pub cover_image_url: Option<String>,
}

/// A row from the `travel_logs` table.
///
/// Unlike the other logs, a visit spans a date range and carries
/// free-text highlights.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TravelLog {
    pub id: DbId,
    pub travel_id: DbId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub rating: Option<i16>,
    pub review: Option<String>,
    pub highlights: Option<String>,
    pub visited_on: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TravelLogInput {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub rating: Option<i16>,
    pub review: Option<String>,
    pub highlights: Option<String>,
    pub visited_on: Option<NaiveDate>,
}
