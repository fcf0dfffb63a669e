// Library crate for the fantasy cricket service
// This file exposes the public API for integration tests

pub mod config;
pub mod event;
pub mod leaderboard;
pub mod matches;
pub mod player;
pub mod scoring;
pub mod shared;
pub mod stats;
pub mod team;
pub mod user;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

// Re-export commonly used types for easier access in tests
pub use event::{EventBus, FantasyEvent};
pub use leaderboard::{compute_leaderboard, compute_user_breakdown, LeaderboardEntry, Roster};
pub use scoring::{compute_points, FantasyPoints, PerformanceStats};
pub use shared::{AppError, AppState};

async fn health() -> Json<Value> {
    Json(json!({
        "message": "Fantasy Cricket Backend is running",
        "status": "OK"
    }))
}

/// All HTTP routes, without transport layers
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/users", post(user::create_user))
        .route("/users/:id", get(user::get_user))
        .route(
            "/players",
            get(player::list_players).post(player::create_player),
        )
        .route("/players/country/:country", get(player::list_players_by_country))
        .route(
            "/players/:id",
            get(player::get_player).delete(player::delete_player),
        )
        .route(
            "/matches",
            get(matches::list_matches).post(matches::create_match),
        )
        .route(
            "/matches/:id",
            get(matches::get_match)
                .put(matches::update_match)
                .delete(matches::delete_match),
        )
        .route("/teams", get(team::list_teams).post(team::save_team))
        .route("/teams/user/:user_id", get(team::get_team))
        .route(
            "/teams/check-availability/:player_id",
            get(team::check_availability),
        )
        .route("/stats", get(stats::list_stats).post(stats::upsert_stats))
        .route("/stats/match/:match_id", get(stats::list_stats_for_match))
        .route("/stats/player/:player_id", get(stats::list_stats_for_player))
        .route(
            "/stats/:id",
            axum::routing::put(stats::update_stats).delete(stats::delete_stats),
        )
        .route("/leaderboard", get(leaderboard::get_leaderboard))
        .route(
            "/leaderboard/user/:user_id",
            get(leaderboard::get_user_breakdown),
        );

    Router::new()
        .route("/", get(health))
        .nest("/api", api)
        .with_state(state)
}
