use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::instrument;

use super::{
    models::{AvailabilityResponse, SaveTeamRequest, TeamModel, TeamSummary},
    service::TeamService,
};
use crate::shared::{AppError, AppState};

fn team_service(state: &AppState) -> TeamService {
    TeamService::new(
        Arc::clone(&state.team_repository),
        Arc::clone(&state.user_repository),
        Arc::clone(&state.player_repository),
        state.event_bus.clone(),
    )
}

/// POST /api/teams
#[instrument(name = "save_team", skip(state))]
pub async fn save_team(
    State(state): State<AppState>,
    Json(request): Json<SaveTeamRequest>,
) -> Result<Json<TeamModel>, AppError> {
    Ok(Json(team_service(&state).save_team(request).await?))
}

/// GET /api/teams
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<TeamSummary>>, AppError> {
    Ok(Json(team_service(&state).list_summaries().await?))
}

/// GET /api/teams/user/:user_id
pub async fn get_team(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<TeamModel>, AppError> {
    Ok(Json(team_service(&state).get_team(&user_id).await?))
}

/// GET /api/teams/check-availability/:player_id
pub async fn check_availability(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let available = team_service(&state).is_player_available(&player_id).await?;
    Ok(Json(AvailabilityResponse { available }))
}
