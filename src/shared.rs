use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::event::EventBus;
use crate::matches::repository::MatchRepository;
use crate::player::repository::PlayerRepository;
use crate::stats::StatsRepository;
use crate::team::repository::TeamRepository;
use crate::user::repository::UserRepository;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub user_repository: Arc<dyn UserRepository>,
    pub player_repository: Arc<dyn PlayerRepository>,
    pub match_repository: Arc<dyn MatchRepository>,
    pub team_repository: Arc<dyn TeamRepository>,
    pub stats_repository: Arc<dyn StatsRepository>,
    pub event_bus: EventBus,
}

impl AppState {
    /// State backed entirely by in-memory repositories
    pub fn in_memory(event_bus: EventBus) -> Self {
        Self {
            user_repository: Arc::new(crate::user::repository::InMemoryUserRepository::new()),
            player_repository: Arc::new(crate::player::repository::InMemoryPlayerRepository::new()),
            match_repository: Arc::new(crate::matches::repository::InMemoryMatchRepository::new()),
            team_repository: Arc::new(crate::team::repository::InMemoryTeamRepository::new()),
            stats_repository: Arc::new(crate::stats::InMemoryStatsRepository::new()),
            event_bus,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

impl From<crate::scoring::ScoringError> for AppError {
    fn from(err: crate::scoring::ScoringError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<crate::stats::StatsError> for AppError {
    fn from(err: crate::stats::StatsError) -> Self {
        use crate::stats::StatsError;
        match err {
            StatsError::Scoring(inner) => inner.into(),
            StatsError::NotFound(_) => AppError::NotFound(err.to_string()),
            StatsError::Repository(msg) => AppError::DatabaseError(msg),
        }
    }
}

impl From<crate::team::TeamError> for AppError {
    fn from(err: crate::team::TeamError) -> Self {
        use crate::team::TeamError;
        match err {
            TeamError::NotFound(_) | TeamError::UserNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            TeamError::Repository(msg) => AppError::DatabaseError(msg),
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}

impl From<crate::leaderboard::LeaderboardError> for AppError {
    fn from(err: crate::leaderboard::LeaderboardError) -> Self {
        use crate::leaderboard::LeaderboardError;
        match err {
            LeaderboardError::NotFound(msg) => AppError::NotFound(msg),
            LeaderboardError::Repository(msg) => AppError::DatabaseError(msg),
        }
    }
}
