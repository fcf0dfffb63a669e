//! Per-user totals over rostered players, captain counted double.
//!
//! `aggregator` holds the pure computation; `service` gathers its inputs
//! from the stores.

pub mod aggregator;
mod errors;
mod handlers;
pub mod models;
pub mod service;

pub use aggregator::{compute_leaderboard, compute_user_breakdown};
pub use errors::LeaderboardError;
pub use handlers::{get_leaderboard, get_user_breakdown};
pub use models::*;
pub use service::LeaderboardService;
