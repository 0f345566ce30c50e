//! Article rules: required fields, tag normalisation, and the sort allow-list.
//!
//! Sorting is the only place a client-supplied token reaches an SQL clause,
//! so it goes through [`BlogSortKey`] and [`SortOrder`], which only ever
//! produce fixed column names and keywords.

use serde::Deserialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Columns an article listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlogSortKey {
    #[default]
    Date,
    Title,
    Category,
    CreatedAt,
    UpdatedAt,
    PublishedAt,
}

impl BlogSortKey {
    /// Accepted spellings, for error messages.
    pub const ACCEPTED: &'static [&'static str] = &[
        "date",
        "title",
        "category",
        "created_at",
        "updated_at",
        "published_at",
    ];

    /// Parse a `sortBy` query value. Both snake_case and camelCase are accepted.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value.trim() {
            "date" => Ok(Self::Date),
            "title" => Ok(Self::Title),
            "category" => Ok(Self::Category),
            "created_at" | "createdAt" => Ok(Self::CreatedAt),
            "updated_at" | "updatedAt" => Ok(Self::UpdatedAt),
            "published_at" | "publishedAt" => Ok(Self::PublishedAt),
            other => Err(CoreError::Validation(format!(
                "Invalid sortBy '{other}'. Must be one of: {}",
                Self::ACCEPTED.join(", ")
            ))),
        }
    }

    /// The column this key orders by.
    pub fn column(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Title => "title",
            Self::Category => "category",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::PublishedAt => "published_at",
        }
    }
}

/// Sort direction. Defaults to descending (newest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Parse an `order` query value, case-insensitively.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(CoreError::Validation(format!(
                "Invalid order '{other}'. Must be 'asc' or 'desc'"
            ))),
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// Tags as clients send them: a JSON array or a comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
    List(Vec<String>),
    Csv(String),
}

impl TagsInput {
    /// Normalise into a trimmed, non-empty tag list, preserving order.
    pub fn into_tags(self) -> Vec<String> {
        match self {
            TagsInput::List(items) => clean_tags(items.iter().map(String::as_str)),
            TagsInput::Csv(raw) => parse_tags(&raw),
        }
    }
}

/// Split a comma-separated tag string into trimmed, non-empty tags.
pub fn parse_tags(raw: &str) -> Vec<String> {
    clean_tags(raw.split(','))
}

fn clean_tags<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    items
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Article title, body, and category must all be present and non-blank.
pub fn validate_article_fields(
    title: Option<&str>,
    content: Option<&str>,
    category: Option<&str>,
) -> Result<(), CoreError> {
    if is_blank(title) || is_blank(content) || is_blank(category) {
        return Err(CoreError::Validation(
            "Title, content, and category are required".into(),
        ));
    }
    Ok(())
}

/// `true` when the value is absent or contains only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
