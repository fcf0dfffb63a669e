pub use handlers::{create_match, delete_match, get_match, list_matches, update_match};
pub use models::{MatchModel, MatchStatus};

mod handlers;
pub mod models;
pub mod repository;
