//! Handlers for `/reads` (books) and their reading logs.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::catalog::{validate_rating, validate_required};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::read::{Read, ReadInput, ReadLog, ReadLogInput};
use folio_db::repositories::{ReadLogRepo, ReadRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::api_key::RequireApiKey;
use crate::response::MessageResponse;
use crate::state::AppState;

fn read_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Read", id })
}

fn log_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Read log",
        id,
    })
}

/// GET /api/reads
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Read>>> {
    Ok(Json(ReadRepo::list(&state.pool).await?))
}

/// GET /api/reads/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Read>> {
    let read = ReadRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| read_not_found(id))?;
    Ok(Json(read))
}

/// POST /api/reads
pub async fn create(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppJson(input): AppJson<ReadInput>,
) -> AppResult<(StatusCode, Json<Read>)> {
    validate_required(&input.title, "title")?;
    let read = ReadRepo::create(&state.pool, &input).await?;
    tracing::info!(read_id = read.id, "Read created");
    Ok((StatusCode::CREATED, Json(read)))
}

/// PUT /api/reads/{id}
pub async fn update(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ReadInput>,
) -> AppResult<Json<Read>> {
    validate_required(&input.title, "title")?;
    let read = ReadRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| read_not_found(id))?;
    Ok(Json(read))
}

/// DELETE /api/reads/{id}
pub async fn delete(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    ReadRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| read_not_found(id))?;
    tracing::info!(read_id = id, "Read deleted");
    Ok(Json(MessageResponse::new("Read deleted")))
}

/// GET /api/reads/logs/all
pub async fn list_all_logs(State(state): State<AppState>) -> AppResult<Json<Vec<ReadLog>>> {
    Ok(Json(ReadLogRepo::list_all(&state.pool).await?))
}

/// GET /api/reads/{id}/logs
pub async fn list_logs(
    State(state): State<AppState>,
    AppPath(read_id): AppPath<DbId>,
) -> AppResult<Json<Vec<ReadLog>>> {
    Ok(Json(ReadLogRepo::list_by_read(&state.pool, read_id).await?))
}

/// GET /api/reads/logs/{id}
pub async fn get_log(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ReadLog>> {
    let log = ReadLogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| log_not_found(id))?;
    Ok(Json(log))
}

/// POST /api/reads/{id}/logs
pub async fn create_log(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(read_id): AppPath<DbId>,
    AppJson(input): AppJson<ReadLogInput>,
) -> AppResult<(StatusCode, Json<ReadLog>)> {
    validate_rating(input.rating)?;
    ReadRepo::find_by_id(&state.pool, read_id)
        .await?
        .ok_or_else(|| read_not_found(read_id))?;
    let log = ReadLogRepo::create(&state.pool, read_id, &input).await?;
    tracing::info!(read_id, log_id = log.id, "Read log created");
    Ok((StatusCode::CREATED, Json(log)))
}

/// PUT /api/reads/logs/{id}
pub async fn update_log(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ReadLogInput>,
) -> AppResult<Json<ReadLog>> {
    validate_rating(input.rating)?;
    let log = ReadLogRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| log_not_found(id))?;
    Ok(Json(log))
}

/// DELETE /api/reads/logs/{id}
pub async fn delete_log(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    ReadLogRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| log_not_found(id))?;
    Ok(Json(MessageResponse::new("Read log deleted")))
}
