use thiserror::Error;

use crate::scoring::ScoringError;
use crate::shared::AppError;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<AppError> for StatsError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(what) => StatsError::NotFound(what),
            other => StatsError::Repository(other.to_string()),
        }
    }
}
