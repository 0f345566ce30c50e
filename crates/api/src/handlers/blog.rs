//! Handlers for the `/blogs` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::blog::{validate_article_fields, SortOrder, TagsInput};
use folio_core::error::CoreError;
use folio_core::types::{DbId, Timestamp};
use folio_db::models::blog::{BlogFilter, CreateBlog, UpdateBlog};
use folio_db::repositories::BlogRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::api_key::RequireApiKey;
use crate::query::BlogListParams;
use crate::response::{with_legacy_ids, ArchiveEntry, BlogBody, BlogDeleted};
use crate::state::AppState;

/// Article fields as clients send them. Everything is optional at the
/// serde level so a missing field becomes a validation error with a
/// useful message rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct BlogPayload {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<TagsInput>,
    #[serde(alias = "isDraft")]
    pub is_draft: Option<bool>,
    #[serde(alias = "publishedAt")]
    pub published_at: Option<Timestamp>,
}

impl BlogPayload {
    /// Validate required fields and normalise tags.
    pub fn into_create(self) -> Result<CreateBlog, CoreError> {
        validate_article_fields(
            self.title.as_deref(),
            self.content.as_deref(),
            self.category.as_deref(),
        )?;
        Ok(CreateBlog {
            title: self.title.unwrap_or_default().trim().to_string(),
            content: self.content.unwrap_or_default(),
            category: self.category.unwrap_or_default().trim().to_string(),
            tags: self.tags.map(TagsInput::into_tags).unwrap_or_default(),
            is_draft: self.is_draft.unwrap_or(false),
            published_at: self.published_at,
        })
    }

    fn into_update(self) -> Result<UpdateBlog, CoreError> {
        let CreateBlog {
            title,
            content,
            category,
            tags,
            is_draft,
            published_at,
        } = self.into_create()?;
        Ok(UpdateBlog {
            title,
            content,
            category,
            tags,
            is_draft,
            published_at,
        })
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Blog", id })
}

/// GET /api/blogs
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<BlogListParams>,
) -> AppResult<Json<Vec<BlogBody>>> {
    let filter = params.into_filter()?;
    let blogs = BlogRepo::list(&state.pool, &filter).await?;
    Ok(Json(with_legacy_ids(blogs)))
}

/// GET /api/blogs/categories
pub async fn categories(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    Ok(Json(BlogRepo::categories(&state.pool).await?))
}

/// GET /api/blogs/archives
pub async fn archives(State(state): State<AppState>) -> AppResult<Json<Vec<ArchiveEntry>>> {
    let buckets = BlogRepo::archives(&state.pool).await?;
    Ok(Json(buckets.into_iter().map(ArchiveEntry::from).collect()))
}

/// GET /api/blogs/category/{category}
pub async fn list_by_category(
    State(state): State<AppState>,
    AppPath(category): AppPath<String>,
) -> AppResult<Json<Vec<BlogBody>>> {
    let filter = BlogFilter {
        category: Some(category),
        order: SortOrder::Desc,
        ..Default::default()
    };
    let blogs = BlogRepo::list(&state.pool, &filter).await?;
    Ok(Json(with_legacy_ids(blogs)))
}

/// GET /api/blogs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<BlogBody>> {
    let blog = BlogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(blog.into()))
}

/// POST /api/blogs
pub async fn create(
    State(state): State<AppState>,
    AppJson(payload): AppJson<BlogPayload>,
) -> AppResult<(StatusCode, Json<BlogBody>)> {
    let input = payload.into_create()?;
    let blog = BlogRepo::create(&state.pool, &input).await?;
    tracing::info!(blog_id = blog.id, category = %blog.category, "Blog created");
    Ok((StatusCode::CREATED, Json(blog.into())))
}

/// PUT /api/blogs/{id}
pub async fn update(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(payload): AppJson<BlogPayload>,
) -> AppResult<Json<BlogBody>> {
    let input = payload.into_update()?;
    let blog = BlogRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(blog_id = id, "Blog updated");
    Ok(Json(blog.into()))
}

/// DELETE /api/blogs/{id}
pub async fn delete(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<BlogDeleted>> {
    let blog = BlogRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(blog_id = id, "Blog deleted");
    Ok(Json(BlogDeleted {
        message: "Blog post deleted successfully".to_string(),
        blog: blog.into(),
    }))
}
