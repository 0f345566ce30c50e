//! Shared response shapes for API handlers.
//!
//! Responses are bare JSON (no `{ "data": ... }` envelope) because the
//! single-page frontend reads arrays and objects directly. Articles and feed
//! entries additionally carry `_id`, the identifier name the frontend keys on.

use folio_core::types::DbId;
use folio_db::models::blog::{ArchiveBucket, Blog};
use folio_db::models::feed::FeedEntry;
use folio_db::models::playlist::PlaylistSong;
use serde::Serialize;

/// Rows that expose their primary key.
pub trait Identified {
    fn id(&self) -> DbId;
}

impl Identified for Blog {
    fn id(&self) -> DbId {
        self.id
    }
}

impl Identified for FeedEntry {
    fn id(&self) -> DbId {
        self.id
    }
}

/// A row serialized with an extra `_id` mirroring `id`.
#[derive(Debug, Serialize)]
pub struct WithLegacyId<T> {
    #[serde(rename = "_id")]
    pub legacy_id: DbId,
    #[serde(flatten)]
    pub item: T,
}

impl<T: Identified> From<T> for WithLegacyId<T> {
    fn from(item: T) -> Self {
        Self {
            legacy_id: item.id(),
            item,
        }
    }
}

/// Wrap every row of a listing.
pub fn with_legacy_ids<T: Identified>(items: Vec<T>) -> Vec<WithLegacyId<T>> {
    items.into_iter().map(WithLegacyId::from).collect()
}

/// An article as returned to clients.
pub type BlogBody = WithLegacyId<Blog>;

/// `{ "message": ... }`, returned by deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response to `DELETE /blogs/{id}`.
#[derive(Debug, Serialize)]
pub struct BlogDeleted {
    pub message: String,
    pub blog: BlogBody,
}

/// Response to `POST /blogs/create`.
#[derive(Debug, Serialize)]
pub struct BlogCreated {
    pub success: bool,
    pub message: String,
    pub blog: BlogBody,
}

/// A bulk-request entry that was not inserted, identified by its position
/// in the submitted array.
#[derive(Debug, Serialize)]
pub struct SkippedEntry {
    pub index: usize,
    pub reason: String,
}

/// Response to `POST /blogs/bulk-create`.
#[derive(Debug, Serialize)]
pub struct BulkBlogsCreated {
    pub success: bool,
    pub message: String,
    pub blogs: Vec<BlogBody>,
    pub skipped: Vec<SkippedEntry>,
}

/// Response to `POST /playlists/{id}/songs/bulk`.
#[derive(Debug, Serialize)]
pub struct BulkSongsCreated {
    pub count: usize,
    pub songs: Vec<PlaylistSong>,
    pub skipped: Vec<SkippedEntry>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ArchivePeriod {
    pub year: i32,
    pub month: i32,
}

/// One archive bucket, shaped `{ "_id": { "year", "month" }, "count" }`.
#[derive(Debug, Serialize)]
pub struct ArchiveEntry {
    #[serde(rename = "_id")]
    pub period: ArchivePeriod,
    pub count: i64,
}

impl From<ArchiveBucket> for ArchiveEntry {
    fn from(bucket: ArchiveBucket) -> Self {
        Self {
            period: ArchivePeriod {
                year: bucket.year,
                month: bucket.month,
            },
            count: bucket.count,
        }
    }
}
