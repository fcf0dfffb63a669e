pub use handlers::{create_player, delete_player, get_player, list_players, list_players_by_country};

mod handlers;
pub mod models;
pub mod repository;
