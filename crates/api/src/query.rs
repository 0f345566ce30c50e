//! Query-string parameter types for API handlers.
//!
//! Values arrive as raw strings and are validated here so every bad value
//! produces the same `{ "error", "code" }` 400 response.

use chrono::{DateTime, NaiveDate, Utc};
use folio_core::blog::{parse_tags, BlogSortKey, SortOrder};
use folio_core::catalog::ScreenKind;
use folio_core::error::CoreError;
use folio_core::types::Timestamp;
use folio_db::models::blog::BlogFilter;
use serde::Deserialize;

/// `GET /blogs` parameters. Names follow the frontend's camelCase.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogListParams {
    pub category: Option<String>,
    /// Comma-separated; matches articles sharing any of the tags.
    pub tags: Option<String>,
    pub is_draft: Option<bool>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl BlogListParams {
    pub fn into_filter(self) -> Result<BlogFilter, CoreError> {
        let sort_by = non_empty(self.sort_by.as_deref())
            .map(BlogSortKey::parse)
            .transpose()?
            .unwrap_or_default();
        let order = non_empty(self.order.as_deref())
            .map(SortOrder::parse)
            .transpose()?
            .unwrap_or_default();
        let start_date = non_empty(self.start_date.as_deref())
            .map(|raw| parse_date_bound(raw, "startDate"))
            .transpose()?;
        let end_date = non_empty(self.end_date.as_deref())
            .map(|raw| parse_date_bound(raw, "endDate"))
            .transpose()?;
        let tags = non_empty(self.tags.as_deref())
            .map(parse_tags)
            .filter(|tags| !tags.is_empty());

        Ok(BlogFilter {
            category: non_empty(self.category.as_deref()).map(str::to_string),
            is_draft: self.is_draft,
            tags,
            start_date,
            end_date,
            sort_by,
            order,
        })
    }
}

/// `GET /screens?type=movie|series`.
#[derive(Debug, Default, Deserialize)]
pub struct ScreenListParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl ScreenListParams {
    pub fn kind(&self) -> Result<Option<ScreenKind>, CoreError> {
        non_empty(self.kind.as_deref())
            .map(ScreenKind::parse)
            .transpose()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Format of a browser `Date` stringified into a query string, once the
/// trailing ` (Zone Name)` is removed.
const JS_DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Accept a full RFC 3339 timestamp, a browser `Date` string
/// (`Fri Mar 01 2024 00:00:00 GMT+0100 (Central European Standard Time)`),
/// or a bare `YYYY-MM-DD`, which is read as midnight UTC.
fn parse_date_bound(raw: &str, field: &str) -> Result<Timestamp, CoreError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    let without_zone_name = raw.split_once(" (").map_or(raw, |(head, _)| head);
    if let Ok(ts) = DateTime::parse_from_str(without_zone_name, JS_DATE_FORMAT) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| CoreError::Validation(format!("Invalid {field} '{raw}'")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn empty_params_use_defaults() {
        let filter = BlogListParams::default().into_filter().unwrap();
        assert_eq!(filter.sort_by, BlogSortKey::Date);
        assert_eq!(filter.order, SortOrder::Desc);
        assert!(filter.tags.is_none());
    }

    #[test]
    fn unknown_sort_key_is_rejected() {
        let params = BlogListParams {
            sort_by: Some("id; DROP TABLE blogs".into()),
            ..Default::default()
        };
        assert_matches!(params.into_filter(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn date_only_bounds_are_midnight_utc() {
        let params = BlogListParams {
            start_date: Some("2024-02-01".into()),
            ..Default::default()
        };
        let filter = params.into_filter().unwrap();
        assert_eq!(
            filter.start_date.unwrap().to_rfc3339(),
            "2024-02-01T00:00:00+00:00"
        );
    }

    #[test]
    fn browser_date_strings_are_accepted() {
        let params = BlogListParams {
            start_date: Some(
                "Fri Mar 01 2024 00:00:00 GMT+0000 (Coordinated Universal Time)".into(),
            ),
            end_date: Some("Sun Mar 31 2024 00:00:00 GMT+0100 (Central European Standard Time)".into()),
            sort_by: Some("date".into()),
            order: Some("desc".into()),
            ..Default::default()
        };
        let filter = params.into_filter().unwrap();
        assert_eq!(
            filter.start_date.unwrap().to_rfc3339(),
            "2024-03-01T00:00:00+00:00"
        );
        assert_eq!(
            filter.end_date.unwrap().to_rfc3339(),
            "2024-03-30T23:00:00+00:00"
        );
    }

    #[test]
    fn malformed_date_is_rejected() {
        let params = BlogListParams {
            end_date: Some("yesterday".into()),
            ..Default::default()
        };
        assert_matches!(params.into_filter(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn tags_are_split_on_commas() {
        let params = BlogListParams {
            tags: Some("rust, web,,".into()),
            ..Default::default()
        };
        assert_eq!(
            params.into_filter().unwrap().tags,
            Some(vec!["rust".to_string(), "web".to_string()])
        );
    }

    #[test]
    fn screen_kind_is_validated() {
        let bad = ScreenListParams {
            kind: Some("podcast".into()),
        };
        assert_matches!(bad.kind(), Err(CoreError::Validation(_)));
        let none = ScreenListParams::default();
        assert_matches!(none.kind(), Ok(None));
    }
}
