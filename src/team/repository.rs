use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::models::TeamModel;
use crate::shared::AppError;

/// Teams keyed by owning user; one team per user
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Stores the team, replacing the user's previous one but keeping its id
    async fn save_team(&self, team: TeamModel) -> Result<TeamModel, AppError>;
    async fn get_team_by_user(&self, user_id: &str) -> Result<Option<TeamModel>, AppError>;
    async fn list_teams(&self) -> Result<Vec<TeamModel>, AppError>;
}

#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<HashMap<String, TeamModel>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    #[instrument(skip(self, team), fields(user_id = %team.user_id))]
    async fn save_team(&self, team: TeamModel) -> Result<TeamModel, AppError> {
        let mut teams = self.teams.write().await;

        let stored = match teams.get(&team.user_id) {
            Some(previous) => TeamModel {
                id: previous.id.clone(),
                created_at: previous.created_at,
                ..team
            },
            None => team,
        };

        teams.insert(stored.user_id.clone(), stored.clone());
        debug!(team_id = %stored.id, "Team stored in memory");
        Ok(stored)
    }

    async fn get_team_by_user(&self, user_id: &str) -> Result<Option<TeamModel>, AppError> {
        Ok(self.teams.read().await.get(user_id).cloned())
    }

    async fn list_teams(&self) -> Result<Vec<TeamModel>, AppError> {
        let mut teams: Vec<TeamModel> = self.teams.read().await.values().cloned().collect();
        teams.sort_by_key(|team| team.created_at);
        Ok(teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn saving_twice_keeps_team_identity() {
        let repo = InMemoryTeamRepository::new();
        let first = repo
            .save_team(TeamModel::new("u1".into(), vec!["a".into()], "a".into()))
            .await
            .unwrap();

        let second = repo
            .save_team(TeamModel::new("u1".into(), vec!["b".into()], "b".into()))
            .await
            .unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.captain_id, "b");
        assert_eq!(repo.list_teams().await.unwrap().len(), 1);
        assert_eq!(
            repo.get_team_by_user("u1").await.unwrap().unwrap().player_ids,
            vec!["b".to_string()]
        );
    }
}
