//! Rows of the `/logs/{type}` activity feed.

use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One catalog item paired with its most recent log.
///
/// `rating` is rendered as a string and `date` falls back to the item's own
/// creation time when it has no logs, matching what the frontend expects.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeedEntry {
    pub id: DbId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub date: Timestamp,
}
