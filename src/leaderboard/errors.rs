use thiserror::Error;

use crate::shared::AppError;

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<AppError> for LeaderboardError {
    fn from(err: AppError) -> Self {
        LeaderboardError::Repository(err.to_string())
    }
}
