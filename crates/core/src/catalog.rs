//! Media catalog rules: log kinds, screen kinds, ratings, and date ranges.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lowest accepted activity-log rating.
pub const MIN_RATING: i16 = 1;

/// Highest accepted activity-log rating.
pub const MAX_RATING: i16 = 5;

/// Number of games returned by the unfiltered recent-activity feed.
pub const RECENT_FEED_LIMIT: i64 = 10;

// ---------------------------------------------------------------------------
// Log kinds
// ---------------------------------------------------------------------------

/// The `{type}` segment of `/logs/{type}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Music,
    Games,
    Movies,
    Series,
    Books,
    Travels,
}

impl LogKind {
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "music" => Ok(Self::Music),
            "games" => Ok(Self::Games),
            "movies" => Ok(Self::Movies),
            "series" => Ok(Self::Series),
            "books" => Ok(Self::Books),
            "travels" => Ok(Self::Travels),
            _ => Err(CoreError::Validation("Invalid log type".into())),
        }
    }

    /// The screen kind a log kind filters on, if it is a screen feed.
    pub fn screen_kind(self) -> Option<ScreenKind> {
        match self {
            Self::Movies => Some(ScreenKind::Movie),
            Self::Series => Some(ScreenKind::Series),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Music => "music",
            Self::Games => "games",
            Self::Movies => "movies",
            Self::Series => "series",
            Self::Books => "books",
            Self::Travels => "travels",
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Screen kinds
// ---------------------------------------------------------------------------

/// A screen work is either a movie or a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenKind {
    Movie,
    Series,
}

impl ScreenKind {
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "movie" => Ok(Self::Movie),
            "series" => Ok(Self::Series),
            other => Err(CoreError::Validation(format!(
                "Invalid screen type '{other}'. Must be 'movie' or 'series'"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Ratings are optional, but when present must lie in `1..=5`.
pub fn validate_rating(rating: Option<i16>) -> Result<(), CoreError> {
    match rating {
        Some(r) if !(MIN_RATING..=MAX_RATING).contains(&r) => Err(CoreError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}, got {r}"
        ))),
        _ => Ok(()),
    }
}

/// A travel log's end date may not precede its start date.
pub fn validate_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), CoreError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(CoreError::Validation(format!(
                "end_date ({end}) must not be before start_date ({start})"
            )));
        }
    }
    Ok(())
}

/// Require a non-blank string field, naming it in the error.
pub fn validate_required(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}
