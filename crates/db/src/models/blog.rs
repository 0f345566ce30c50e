//! Article (blog post) model, DTOs, and listing filter.

use folio_core::blog::{BlogSortKey, SortOrder};
use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `blogs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Blog {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category: String,
    pub date: Timestamp,
    pub tags: Vec<String>,
    pub is_draft: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an article. Validated by the caller.
#[derive(Debug, Clone)]
pub struct CreateBlog {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub is_draft: bool,
    pub published_at: Option<Timestamp>,
}

/// DTO for a full-field article overwrite.
#[derive(Debug, Clone)]
pub struct UpdateBlog {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub is_draft: bool,
    pub published_at: Option<Timestamp>,
}

/// Filters accepted by [`crate::repositories::BlogRepo::list`].
///
/// Every field narrows the result; `None` means "don't filter".
#[derive(Debug, Clone, Default)]
pub struct BlogFilter {
    pub category: Option<String>,
    pub is_draft: Option<bool>,
    /// Matches articles sharing at least one tag with this set.
    pub tags: Option<Vec<String>>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub sort_by: BlogSortKey,
    pub order: SortOrder,
}

/// One month of the published-article archive.
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct ArchiveBucket {
    pub year: i32,
    pub month: i32,
    pub count: i64,
}
