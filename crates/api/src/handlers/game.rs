//! Handlers for the `/games` resource and its play logs.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::catalog::{validate_rating, validate_required};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::game::{Game, GameInput, GameLog, GameLogInput};
use folio_db::repositories::{GameLogRepo, GameRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::api_key::RequireApiKey;
use crate::response::MessageResponse;
use crate::state::AppState;

fn game_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Game", id })
}

fn log_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Game log",
        id,
    })
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

/// GET /api/games
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Game>>> {
    Ok(Json(GameRepo::list(&state.pool).await?))
}

/// GET /api/games/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Game>> {
    let game = GameRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| game_not_found(id))?;
    Ok(Json(game))
}

/// POST /api/games
pub async fn create(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppJson(input): AppJson<GameInput>,
) -> AppResult<(StatusCode, Json<Game>)> {
    validate_required(&input.title, "title")?;
    let game = GameRepo::create(&state.pool, &input).await?;
    tracing::info!(game_id = game.id, "Game created");
    Ok((StatusCode::CREATED, Json(game)))
}

/// PUT /api/games/{id}
pub async fn update(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<GameInput>,
) -> AppResult<Json<Game>> {
    validate_required(&input.title, "title")?;
    let game = GameRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| game_not_found(id))?;
    Ok(Json(game))
}

/// DELETE /api/games/{id}
///
/// Removes the game's logs as well.
pub async fn delete(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    GameRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| game_not_found(id))?;
    tracing::info!(game_id = id, "Game deleted");
    Ok(Json(MessageResponse::new("Game deleted")))
}

// ---------------------------------------------------------------------------
// Game logs
// ---------------------------------------------------------------------------

/// GET /api/games/logs/all
pub async fn list_all_logs(State(state): State<AppState>) -> AppResult<Json<Vec<GameLog>>> {
    Ok(Json(GameLogRepo::list_all(&state.pool).await?))
}

/// GET /api/games/{id}/logs
pub async fn list_logs(
    State(state): State<AppState>,
    AppPath(game_id): AppPath<DbId>,
) -> AppResult<Json<Vec<GameLog>>> {
    Ok(Json(GameLogRepo::list_by_game(&state.pool, game_id).await?))
}

/// GET /api/games/logs/{id}
pub async fn get_log(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<GameLog>> {
    let log = GameLogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| log_not_found(id))?;
    Ok(Json(log))
}

/// POST /api/games/{id}/logs
pub async fn create_log(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(game_id): AppPath<DbId>,
    AppJson(input): AppJson<GameLogInput>,
) -> AppResult<(StatusCode, Json<GameLog>)> {
    validate_rating(input.rating)?;
    GameRepo::find_by_id(&state.pool, game_id)
        .await?
        .ok_or_else(|| game_not_found(game_id))?;
    let log = GameLogRepo::create(&state.pool, game_id, &input).await?;
    tracing::info!(game_id, log_id = log.id, "Game log created");
    Ok((StatusCode::CREATED, Json(log)))
}

/// PUT /api/games/logs/{id}
pub async fn update_log(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<GameLogInput>,
) -> AppResult<Json<GameLog>> {
    validate_rating(input.rating)?;
    let log = GameLogRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| log_not_found(id))?;
    Ok(Json(log))
}

/// DELETE /api/games/logs/{id}
pub async fn delete_log(
    _admin: RequireApiKey,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    GameLogRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| log_not_found(id))?;
    Ok(Json(MessageResponse::new("Game log deleted")))
}
