use thiserror::Error;

use crate::shared::AppError;

#[derive(Debug, Error, PartialEq)]
pub enum TeamError {
    #[error("Team must have exactly {expected} players, got {actual}")]
    WrongSize { expected: usize, actual: usize },

    #[error("Team cannot have duplicate players ({0})")]
    DuplicatePlayer(String),

    #[error("Unknown player {0}")]
    UnknownPlayer(String),

    #[error("Cannot have more than {limit} players from {country}")]
    CountryLimit { country: String, limit: usize },

    #[error("Captain must be in the team")]
    CaptainNotInTeam,

    #[error("User {0} not found")]
    UserNotFound(String),

    #[error("Team not found for user {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<AppError> for TeamError {
    fn from(err: AppError) -> Self {
        TeamError::Repository(err.to_string())
    }
}
