use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoringError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
