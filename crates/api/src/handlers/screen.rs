//! Handlers for `/screens` (movies and series) and their watch logs.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::catalog::{validate_rating, validate_required};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::screen::{Screen, ScreenInput, ScreenLog, ScreenLogInput};
use folio_db::repositories::{ScreenLogRepo, ScreenRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::api_key::RequireApiKey;
use crate::query::ScreenListParams;
use crate::response::MessageResponse;
use crate::state::AppState;

fn screen_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Screen", id })
}

fn log_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Screen log",
        id,
    })
}

/// GET /api/screens?type=movie|series
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ScreenListParams>,
) -> AppResult<Json<Vec<Screen>>> {
    let kind = params.kind()?;
    Ok(Json(ScreenRepo::list(&state.pool, kind).await?))
}

/// GET /api/screens/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Screen>> {
    let screen = ScreenRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| screen_not_found(id))?;
    Ok(Json(screen))
}

/// POST /api/screens
pub async fn create(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppJson(input): AppJson<ScreenInput>,
) -> AppResult<(StatusCode, Json<Screen>)> {
    validate_required(&input.title, "title")?;
    let screen = ScreenRepo::create(&state.pool, &input).await?;
    tracing::info!(screen_id = screen.id, kind = %screen.kind, "Screen created");
    Ok((StatusCode::CREATED, Json(screen)))
}

/// PUT /api/screens/{id}
pub async fn update(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ScreenInput>,
) -> AppResult<Json<Screen>> {
    validate_required(&input.title, "title")?;
    let screen = ScreenRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| screen_not_found(id))?;
    Ok(Json(screen))
}

/// DELETE /api/screens/{id}
pub async fn delete(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    ScreenRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| screen_not_found(id))?;
    tracing::info!(screen_id = id, "Screen deleted");
    Ok(Json(MessageResponse::new("Screen deleted")))
}

/// GET /api/screens/logs/all
pub async fn list_all_logs(State(state): State<AppState>) -> AppResult<Json<Vec<ScreenLog>>> {
    Ok(Json(ScreenLogRepo::list_all(&state.pool).await?))
}

/// GET /api/screens/{id}/logs
pub async fn list_logs(
    State(state): State<AppState>,
    AppPath(screen_id): AppPath<DbId>,
) -> AppResult<Json<Vec<ScreenLog>>> {
    Ok(Json(ScreenLogRepo::list_by_screen(&state.pool, screen_id).await?))
}

/// GET /api/screens/logs/{id}
pub async fn get_log(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ScreenLog>> {
    let log = ScreenLogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| log_not_found(id))?;
    Ok(Json(log))
}

/// POST /api/screens/{id}/logs
pub async fn create_log(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(screen_id): AppPath<DbId>,
    AppJson(input): AppJson<ScreenLogInput>,
) -> AppResult<(StatusCode, Json<ScreenLog>)> {
    validate_rating(input.rating)?;
    ScreenRepo::find_by_id(&state.pool, screen_id)
        .await?
        .ok_or_else(|| screen_not_found(screen_id))?;
    let log = ScreenLogRepo::create(&state.pool, screen_id, &input).await?;
    tracing::info!(screen_id, log_id = log.id, "Screen log created");
    Ok((StatusCode::CREATED, Json(log)))
}

/// PUT /api/screens/logs/{id}
pub async fn update_log(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ScreenLogInput>,
) -> AppResult<Json<ScreenLog>> {
    validate_rating(input.rating)?;
    let log = ScreenLogRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| log_not_found(id))?;
    Ok(Json(log))
}

/// DELETE /api/screens/logs/{id}
pub async fn delete_log(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    ScreenLogRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| log_not_found(id))?;
    Ok(Json(MessageResponse::new("Screen log deleted")))
}
