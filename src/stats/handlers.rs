use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::instrument;

use super::{StatsPatch, StatsRecord, StatsService, UpsertStatsRequest};
use crate::shared::{AppError, AppState};

fn stats_service(state: &AppState) -> StatsService {
    StatsService::new(
        Arc::clone(&state.stats_repository),
        Arc::clone(&state.match_repository),
        Arc::clone(&state.player_repository),
        state.event_bus.clone(),
    )
}

/// POST /api/stats
///
/// Creates or replaces the stats for the (match, player) pair in the body
#[instrument(name = "upsert_stats", skip(state))]
pub async fn upsert_stats(
    State(state): State<AppState>,
    Json(request): Json<UpsertStatsRequest>,
) -> Result<Json<StatsRecord>, AppError> {
    let record = stats_service(&state).record_stats(request).await?;
    Ok(Json(record))
}

/// PUT /api/stats/:id
#[instrument(name = "update_stats", skip(state))]
pub async fn update_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<StatsPatch>,
) -> Result<Json<StatsRecord>, AppError> {
    let record = stats_service(&state).update_stats(&id, &patch).await?;
    Ok(Json(record))
}

/// DELETE /api/stats/:id
#[instrument(name = "delete_stats", skip(state))]
pub async fn delete_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    stats_service(&state).delete_stats(&id).await?;
    Ok(Json(json!({ "message": "Stats deleted" })))
}

/// GET /api/stats
pub async fn list_stats(State(state): State<AppState>) -> Result<Json<Vec<StatsRecord>>, AppError> {
    Ok(Json(stats_service(&state).list_all().await?))
}

/// GET /api/stats/match/:match_id
pub async fn list_stats_for_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<Vec<StatsRecord>>, AppError> {
    Ok(Json(stats_service(&state).list_for_match(&match_id).await?))
}

/// GET /api/stats/player/:player_id
pub async fn list_stats_for_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<Vec<StatsRecord>>, AppError> {
    Ok(Json(stats_service(&state).list_for_player(&player_id).await?))
}
