//! Handlers for the read-only `/logs` activity feeds.

use axum::extract::State;
use axum::Json;
use folio_core::catalog::LogKind;
use folio_db::models::feed::FeedEntry;
use folio_db::repositories::LogFeedRepo;

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::response::{with_legacy_ids, WithLegacyId};
use crate::state::AppState;

/// GET /api/logs
pub async fn recent(State(state): State<AppState>) -> AppResult<Json<Vec<WithLegacyId<FeedEntry>>>> {
    let entries = LogFeedRepo::recent_games(&state.pool).await?;
    Ok(Json(with_legacy_ids(entries)))
}

/// GET /api/logs/{type}
pub async fn by_kind(
    State(state): State<AppState>,
    AppPath(kind): AppPath<String>,
) -> AppResult<Json<Vec<WithLegacyId<FeedEntry>>>> {
    let kind = LogKind::parse(&kind)?;
    let entries = LogFeedRepo::feed(&state.pool, kind).await?;
    Ok(Json(with_legacy_ids(entries)))
}
