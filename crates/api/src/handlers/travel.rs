//! Handlers for `/travels` and their visit logs.
//!
//! Visit logs carry a date range; an end date before the start date is a
//! 400 here before the database constraint would turn it into one.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::catalog::{validate_date_range, validate_rating, validate_required};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::travel::{Travel, TravelInput, TravelLog, TravelLogInput};
use folio_db::repositories::{TravelLogRepo, TravelRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::api_key::RequireApiKey;
use crate::response::MessageResponse;
use crate::state::AppState;

fn travel_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Travel", id })
}

fn log_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Travel log",
        id,
    })
}

fn validate_log(input: &TravelLogInput) -> Result<(), CoreError> {
    validate_rating(input.rating)?;
    validate_date_range(input.start_date, input.end_date)
}

pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Travel>>> {
    Ok(Json(TravelRepo::list(&state.pool).await?))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Travel>> {
    let travel = TravelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| travel_not_found(id))?;
    Ok(Json(travel))
}

pub async fn create(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppJson(input): AppJson<TravelInput>,
) -> AppResult<(StatusCode, Json<Travel>)> {
    validate_required(&input.destination, "destination")?;
    let travel = TravelRepo::create(&state.pool, &input).await?;
    tracing::info!(travel_id = travel.id, "Travel created");
    Ok((StatusCode::CREATED, Json(travel)))
}

pub async fn update(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<TravelInput>,
) -> AppResult<Json<Travel>> {
    validate_required(&input.destination, "destination")?;
    let travel = TravelRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| travel_not_found(id))?;
    Ok(Json(travel))
}

pub async fn delete(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    TravelRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| travel_not_found(id))?;
    tracing::info!(travel_id = id, "Travel deleted");
    Ok(Json(MessageResponse::new("Travel deleted")))
}

pub async fn list_all_logs(State(state): State<AppState>) -> AppResult<Json<Vec<TravelLog>>> {
    Ok(Json(TravelLogRepo::list_all(&state.pool).await?))
}

pub async fn list_logs(
    State(state): State<AppState>,
    AppPath(travel_id): AppPath<DbId>,
) -> AppResult<Json<Vec<TravelLog>>> {
    Ok(Json(TravelLogRepo::list_by_travel(&state.pool, travel_id).await?))
}

pub async fn get_log(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<TravelLog>> {
    let log = TravelLogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| log_not_found(id))?;
    Ok(Json(log))
}

pub async fn create_log(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(travel_id): AppPath<DbId>,
    AppJson(input): AppJson<TravelLogInput>,
) -> AppResult<(StatusCode, Json<TravelLog>)> {
    validate_log(&input)?;
    TravelRepo::find_by_id(&state.pool, travel_id)
        .await?
        .ok_or_else(|| travel_not_found(travel_id))?;
    let log = TravelLogRepo::create(&state.pool, travel_id, &input).await?;
    tracing::info!(travel_id, log_id = log.id, "Travel log created");
    Ok((StatusCode::CREATED, Json(log)))
}

pub async fn update_log(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<TravelLogInput>,
) -> AppResult<Json<TravelLog>> {
    validate_log(&input)?;
    let log = TravelLogRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| log_not_found(id))?;
    Ok(Json(log))
}

pub async fn delete_log(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    TravelLogRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| log_not_found(id))?;
    Ok(Json(MessageResponse::new("Travel log deleted")))
}
