pub use handlers::{check_availability, get_team, list_teams, save_team};

mod errors;
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

pub use errors::TeamError;
pub use models::TeamModel;
