use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{LeaderboardEntry, LeaderboardService, UserBreakdown};
use crate::shared::{AppError, AppState};

fn leaderboard_service(state: &AppState) -> LeaderboardService {
    LeaderboardService::new(
        Arc::clone(&state.team_repository),
        Arc::clone(&state.user_repository),
        Arc::clone(&state.player_repository),
        Arc::clone(&state.match_repository),
        Arc::clone(&state.stats_repository),
    )
}

/// GET /api/leaderboard
///
/// Every ranked team with owner, captain and per-match totals
#[instrument(name = "get_leaderboard", skip(state))]
pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let entries = leaderboard_service(&state).leaderboard().await?;
    info!(entry_count = entries.len(), "Leaderboard served");
    Ok(Json(entries))
}

/// GET /api/leaderboard/user/:user_id
#[instrument(name = "get_user_breakdown", skip(state))]
pub async fn get_user_breakdown(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserBreakdown>, AppError> {
    Ok(Json(leaderboard_service(&state).user_breakdown(&user_id).await?))
}
