use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::models::PlayerModel;
use crate::shared::AppError;

#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn create_player(&self, player: &PlayerModel) -> Result<(), AppError>;
    async fn get_player(&self, player_id: &str) -> Result<Option<PlayerModel>, AppError>;
    /// Sorted by country, then name
    async fn list_players(&self) -> Result<Vec<PlayerModel>, AppError>;
    /// Returns the removed player, if any
    async fn delete_player(&self, player_id: &str) -> Result<Option<PlayerModel>, AppError>;
}

#[derive(Debug, Default)]
pub struct InMemoryPlayerRepository {
    players: RwLock<HashMap<String, PlayerModel>>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    #[instrument(skip(self, player))]
    async fn create_player(&self, player: &PlayerModel) -> Result<(), AppError> {
        let mut players = self.players.write().await;
        if players.contains_key(&player.id) {
            return Err(AppError::Conflict("Player already exists".to_string()));
        }
        players.insert(player.id.clone(), player.clone());
        debug!(player_id = %player.id, country = %player.country, "Player stored in memory");
        Ok(())
    }

    async fn get_player(&self, player_id: &str) -> Result<Option<PlayerModel>, AppError> {
        Ok(self.players.read().await.get(player_id).cloned())
    }

    async fn list_players(&self) -> Result<Vec<PlayerModel>, AppError> {
        let mut players: Vec<PlayerModel> = self.players.read().await.values().cloned().collect();
        players.sort_by(|a, b| a.country.cmp(&b.country).then_with(|| a.name.cmp(&b.name)));
        Ok(players)
    }

    #[instrument(skip(self))]
    async fn delete_player(&self, player_id: &str) -> Result<Option<PlayerModel>, AppError> {
        Ok(self.players.write().await.remove(player_id))
    }
}
