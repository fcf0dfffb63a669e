use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{info, instrument};

use super::models::{CreateMatchRequest, MatchModel, UpdateMatchRequest};
use crate::event::FantasyEvent;
use crate::shared::{AppError, AppState};

/// POST /api/matches
#[instrument(name = "create_match", skip(state))]
pub async fn create_match(
    State(state): State<AppState>,
    Json(request): Json<CreateMatchRequest>,
) -> Result<(StatusCode, Json<MatchModel>), AppError> {
    if request.team1.trim().is_empty() || request.team2.trim().is_empty() {
        return Err(AppError::BadRequest("Both teams are required".to_string()));
    }

    let game = request.into_model();
    state.match_repository.create_match(&game).await?;

    info!(match_id = %game.id, match_number = game.match_number, "Match created");
    state.event_bus.emit(FantasyEvent::MatchCreated {
        r#match: game.clone(),
    });

    Ok((StatusCode::CREATED, Json(game)))
}

/// GET /api/matches
pub async fn list_matches(State(state): State<AppState>) -> Result<Json<Vec<MatchModel>>, AppError> {
    Ok(Json(state.match_repository.list_matches().await?))
}

/// GET /api/matches/:id
pub async fn get_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<MatchModel>, AppError> {
    state
        .match_repository
        .get_match(&match_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Match not found".to_string()))
}

/// PUT /api/matches/:id
#[instrument(name = "update_match", skip(state))]
pub async fn update_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Json(request): Json<UpdateMatchRequest>,
) -> Result<Json<MatchModel>, AppError> {
    let current = state
        .match_repository
        .get_match(&match_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Match not found".to_string()))?;

    let updated = request.apply(&current);
    state.match_repository.replace_match(&updated).await?;

    info!(match_id = %updated.id, status = %updated.status, "Match updated");
    state.event_bus.emit(FantasyEvent::MatchUpdated {
        r#match: updated.clone(),
    });

    Ok(Json(updated))
}

/// DELETE /api/matches/:id
#[instrument(name = "delete_match", skip(state))]
pub async fn delete_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    state
        .match_repository
        .delete_match(&match_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Match not found".to_string()))?;

    info!(match_id = %match_id, "Match deleted");
    state.event_bus.emit(FantasyEvent::MatchDeleted { id: match_id });

    Ok(Json(json!({ "message": "Match deleted" })))
}
