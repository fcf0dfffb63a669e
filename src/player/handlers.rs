use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{info, instrument};

use super::models::{CreatePlayerRequest, PlayerModel};
use crate::shared::{AppError, AppState};

/// POST /api/players
#[instrument(name = "create_player", skip(state))]
pub async fn create_player(
    State(state): State<AppState>,
    Json(request): Json<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<PlayerModel>), AppError> {
    let name = request.name.trim();
    let country = request.country.trim();
    if name.is_empty() || country.is_empty() {
        return Err(AppError::BadRequest(
            "Player name and country are required".to_string(),
        ));
    }

    let player = PlayerModel::new(
        name.to_string(),
        country.to_string(),
        request.role,
        request.created_by,
    );
    state.player_repository.create_player(&player).await?;

    info!(player_id = %player.id, name = %player.name, "Player created");
    Ok((StatusCode::CREATED, Json(player)))
}

/// GET /api/players
pub async fn list_players(State(state): State<AppState>) -> Result<Json<Vec<PlayerModel>>, AppError> {
    Ok(Json(state.player_repository.list_players().await?))
}

/// GET /api/players/country/:country
#[instrument(skip(state))]
pub async fn list_players_by_country(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Result<Json<Vec<PlayerModel>>, AppError> {
    let mut players: Vec<PlayerModel> = state
        .player_repository
        .list_players()
        .await?
        .into_iter()
        .filter(|player| player.country == country)
        .collect();
    players.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Json(players))
}

/// GET /api/players/:id
pub async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<PlayerModel>, AppError> {
    state
        .player_repository
        .get_player(&player_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Player not found".to_string()))
}

/// DELETE /api/players/:id
#[instrument(name = "delete_player", skip(state))]
pub async fn delete_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    state
        .player_repository
        .delete_player(&player_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;

    info!(player_id = %player_id, "Player deleted");
    Ok(Json(json!({ "message": "Player deleted" })))
}
