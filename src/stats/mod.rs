mod errors;
mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use errors::StatsError;
pub use handlers::{
    delete_stats, list_stats, list_stats_for_match, list_stats_for_player, update_stats,
    upsert_stats,
};
pub use models::*;
pub use repository::{InMemoryStatsRepository, StatsRepository, UpsertOutcome};
pub use service::StatsService;
