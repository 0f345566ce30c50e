//! Admin ingestion endpoints for articles: direct create, markdown upload,
//! and bulk import.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::blog::{is_blank, validate_article_fields, TagsInput};
use folio_core::error::CoreError;
use folio_core::markdown::{parse_document, strip_front_matter};
use folio_db::models::blog::CreateBlog;
use folio_db::repositories::BlogRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::blog::BlogPayload;
use crate::middleware::api_key::RequireApiKey;
use crate::response::{with_legacy_ids, BlogBody, BlogCreated, BulkBlogsCreated, SkippedEntry};
use crate::state::AppState;

/// POST /api/blogs/create
pub async fn create(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppJson(payload): AppJson<BlogPayload>,
) -> AppResult<(StatusCode, Json<BlogCreated>)> {
    let input = payload.into_create()?;
    let blog = BlogRepo::create(&state.pool, &input).await?;
    tracing::info!(blog_id = blog.id, "Blog created via admin API");
    Ok((
        StatusCode::CREATED,
        Json(BlogCreated {
            success: true,
            message: "Blog created successfully".to_string(),
            blog: blog.into(),
        }),
    ))
}

/// A markdown document plus optional overrides for what it declares.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FromFilePayload {
    pub title: Option<String>,
    pub category: Option<String>,
    pub tags: Option<TagsInput>,
    pub markdown_content: Option<String>,
    /// Used for the title when neither the payload nor the document has one.
    pub file_name: Option<String>,
}

impl FromFilePayload {
    /// Fields given explicitly win over those found in the document.
    fn into_create(self) -> Result<CreateBlog, CoreError> {
        let markdown = self.markdown_content.unwrap_or_default();
        if markdown.trim().is_empty() {
            return Err(CoreError::Validation(
                "Title, category, and markdownContent are required".into(),
            ));
        }

        let doc = parse_document(&markdown, self.file_name.as_deref());
        let (title, content) = if is_blank(self.title.as_deref()) {
            (doc.title, doc.body)
        } else {
            (self.title, strip_front_matter(&markdown).to_string())
        };
        let category = self.category.filter(|c| !c.trim().is_empty()).or(doc.category);
        let tags = match self.tags {
            Some(tags) => tags.into_tags(),
            None => doc.tags,
        };

        validate_article_fields(title.as_deref(), Some(content.as_str()), category.as_deref())
            .map_err(|_| {
                CoreError::Validation("Title, category, and markdownContent are required".into())
            })?;

        Ok(CreateBlog {
            title: title.unwrap_or_default().trim().to_string(),
            content,
            category: category.unwrap_or_default().trim().to_string(),
            tags,
            is_draft: false,
            published_at: None,
        })
    }
}

/// POST /api/blogs/from-file
pub async fn from_file(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppJson(payload): AppJson<FromFilePayload>,
) -> AppResult<(StatusCode, Json<BlogBody>)> {
    let input = payload.into_create()?;
    let blog = BlogRepo::create(&state.pool, &input).await?;
    tracing::info!(blog_id = blog.id, title = %blog.title, "Blog created from markdown");
    Ok((StatusCode::CREATED, Json(blog.into())))
}

#[derive(Debug, Deserialize)]
pub struct BulkBlogsPayload {
    pub blogs: Option<Vec<serde_json::Value>>,
}

/// Split raw entries into valid inserts and skipped indices.
fn partition_entries(entries: Vec<serde_json::Value>) -> (Vec<CreateBlog>, Vec<SkippedEntry>) {
    let mut valid = Vec::new();
    let mut skipped = Vec::new();
    for (index, entry) in entries.into_iter().enumerate() {
        let parsed = serde_json::from_value::<BlogPayload>(entry)
            .map_err(|e| e.to_string())
            .and_then(|payload| payload.into_create().map_err(|e| e.to_string()));
        match parsed {
            Ok(input) => valid.push(input),
            Err(reason) => skipped.push(SkippedEntry { index, reason }),
        }
    }
    (valid, skipped)
}

/// POST /api/blogs/bulk-create
///
/// Invalid entries are skipped and reported; the rest are inserted in one
/// transaction.
pub async fn bulk_create(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppJson(payload): AppJson<BulkBlogsPayload>,
) -> AppResult<(StatusCode, Json<BulkBlogsCreated>)> {
    let entries = payload
        .blogs
        .filter(|b| !b.is_empty())
        .ok_or_else(|| AppError::BadRequest("blogs array is required".into()))?;

    let (valid, skipped) = partition_entries(entries);
    let created = BlogRepo::create_many(&state.pool, &valid).await?;
    tracing::info!(
        created = created.len(),
        skipped = skipped.len(),
        "Bulk blog import finished"
    );

    Ok((
        StatusCode::CREATED,
        Json(BulkBlogsCreated {
            success: true,
            message: format!("Created {} blog(s)", created.len()),
            blogs: with_legacy_ids(created),
            skipped,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn ingest(value: serde_json::Value) -> Result<CreateBlog, CoreError> {
        serde_json::from_value::<FromFilePayload>(value)
            .unwrap()
            .into_create()
    }

    #[test]
    fn title_and_category_come_from_front_matter() {
        let input = ingest(json!({
            "markdownContent": "---\ntitle: Notes\ncategory: tech\ntags: [a, b]\n---\nBody",
        }))
        .unwrap();
        assert_eq!(input.title, "Notes");
        assert_eq!(input.category, "tech");
        assert_eq!(input.tags, vec!["a", "b"]);
        assert_eq!(input.content, "Body");
    }

    #[test]
    fn explicit_title_keeps_heading_in_body() {
        let input = ingest(json!({
            "title": "Chosen",
            "category": "personal",
            "markdownContent": "# Heading\ntext",
        }))
        .unwrap();
        assert_eq!(input.title, "Chosen");
        assert_eq!(input.content, "# Heading\ntext");
    }

    #[test]
    fn file_name_is_last_resort_for_title() {
        let input = ingest(json!({
            "category": "tech",
            "markdownContent": "just text",
            "fileName": "my-first-post.md",
        }))
        .unwrap();
        assert_eq!(input.title, "my first post");
    }

    #[test]
    fn missing_category_everywhere_is_rejected() {
        assert!(ingest(json!({ "markdownContent": "# T\nbody" })).is_err());
    }

    #[test]
    fn bulk_partition_reports_indices() {
        let (valid, skipped) = partition_entries(vec![
            json!({ "title": "ok", "content": "c", "category": "tech" }),
            json!({ "title": "no content", "category": "tech" }),
            json!("not an object"),
        ]);
        assert_eq!(valid.len(), 1);
        let indices: Vec<usize> = skipped.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2]);
    }
}
