use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::MatchModel;
use crate::shared::AppError;

#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Fails with `Conflict` when the match number is taken
    async fn create_match(&self, game: &MatchModel) -> Result<(), AppError>;
    async fn get_match(&self, match_id: &str) -> Result<Option<MatchModel>, AppError>;
    /// Sorted by date, earliest first
    async fn list_matches(&self) -> Result<Vec<MatchModel>, AppError>;
    /// Replaces the stored match with the same id
    async fn replace_match(&self, game: &MatchModel) -> Result<(), AppError>;
    async fn delete_match(&self, match_id: &str) -> Result<Option<MatchModel>, AppError>;
}

#[derive(Debug, Default)]
pub struct InMemoryMatchRepository {
    matches: RwLock<HashMap<String, MatchModel>>,
}

impl InMemoryMatchRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn number_taken(matches: &HashMap<String, MatchModel>, game: &MatchModel) -> bool {
    matches
        .values()
        .any(|existing| existing.id != game.id && existing.match_number == game.match_number)
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    #[instrument(skip(self, game))]
    async fn create_match(&self, game: &MatchModel) -> Result<(), AppError> {
        let mut matches = self.matches.write().await;
        if number_taken(&matches, game) {
            warn!(match_number = game.match_number, "Match number already in use");
            return Err(AppError::Conflict(format!(
                "Match number {} already exists",
                game.match_number
            )));
        }

        matches.insert(game.id.clone(), game.clone());
        debug!(match_id = %game.id, "Match stored in memory");
        Ok(())
    }

    async fn get_match(&self, match_id: &str) -> Result<Option<MatchModel>, AppError> {
        Ok(self.matches.read().await.get(match_id).cloned())
    }

    async fn list_matches(&self) -> Result<Vec<MatchModel>, AppError> {
        let mut matches: Vec<MatchModel> = self.matches.read().await.values().cloned().collect();
        matches.sort_by_key(|game| game.date);
        Ok(matches)
    }

    #[instrument(skip(self, game))]
    async fn replace_match(&self, game: &MatchModel) -> Result<(), AppError> {
        let mut matches = self.matches.write().await;
        if !matches.contains_key(&game.id) {
            return Err(AppError::NotFound("Match not found".to_string()));
        }
        if number_taken(&matches, game) {
            return Err(AppError::Conflict(format!(
                "Match number {} already exists",
                game.match_number
            )));
        }

        matches.insert(game.id.clone(), game.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_match(&self, match_id: &str) -> Result<Option<MatchModel>, AppError> {
        Ok(self.matches.write().await.remove(match_id))
    }
}
