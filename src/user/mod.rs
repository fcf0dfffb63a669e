pub use handlers::{create_user, get_user};

mod handlers;
pub mod models;
pub mod repository;
