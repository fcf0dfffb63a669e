use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::{
    models::{SaveTeamRequest, TeamModel, TeamSummary},
    repository::TeamRepository,
    validation::validate_roster,
    TeamError,
};
use crate::{
    event::{EventBus, FantasyEvent},
    leaderboard::CaptainRef,
    player::{models::PlayerModel, repository::PlayerRepository},
    user::repository::UserRepository,
};

pub struct TeamService {
    repository: Arc<dyn TeamRepository>,
    user_repository: Arc<dyn UserRepository>,
    player_repository: Arc<dyn PlayerRepository>,
    event_bus: EventBus,
}

impl TeamService {
    pub fn new(
        repository: Arc<dyn TeamRepository>,
        user_repository: Arc<dyn UserRepository>,
        player_repository: Arc<dyn PlayerRepository>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            repository,
            user_repository,
            player_repository,
            event_bus,
        }
    }

    async fn player_directory(&self) -> Result<HashMap<String, PlayerModel>, TeamError> {
        Ok(self
            .player_repository
            .list_players()
            .await?
            .into_iter()
            .map(|player| (player.id.clone(), player))
            .collect())
    }

    /// Validates and stores a user's team, replacing any previous one
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn save_team(&self, request: SaveTeamRequest) -> Result<TeamModel, TeamError> {
        if self
            .user_repository
            .get_user(&request.user_id)
            .await?
            .is_none()
        {
            return Err(TeamError::UserNotFound(request.user_id));
        }

        let directory = self.player_directory().await?;
        if let Err(err) = validate_roster(&request.players, &request.captain, &directory) {
            warn!(error = %err, "Rejected team");
            return Err(err);
        }

        let team = self
            .repository
            .save_team(TeamModel::new(
                request.user_id,
                request.players,
                request.captain,
            ))
            .await?;

        info!(team_id = %team.id, captain_id = %team.captain_id, "Team saved");
        self.event_bus
            .emit(FantasyEvent::TeamUpdated { team: team.clone() });

        Ok(team)
    }

    pub async fn get_team(&self, user_id: &str) -> Result<TeamModel, TeamError> {
        self.repository
            .get_team_by_user(user_id)
            .await?
            .ok_or_else(|| TeamError::NotFound(user_id.to_string()))
    }

    /// Owner and captain of every team, without player lists
    pub async fn list_summaries(&self) -> Result<Vec<TeamSummary>, TeamError> {
        let directory = self.player_directory().await?;
        let teams = self.repository.list_teams().await?;

        let mut summaries = Vec::with_capacity(teams.len());
        for team in teams {
            let username = self
                .user_repository
                .get_user(&team.user_id)
                .await?
                .map(|user| user.username);
            let captain = directory.get(&team.captain_id).map(|player| CaptainRef {
                id: player.id.clone(),
                name: player.name.clone(),
            });

            summaries.push(TeamSummary {
                user_id: team.user_id,
                username,
                captain,
            });
        }

        Ok(summaries)
    }

    /// A player is available while no team has picked them
    pub async fn is_player_available(&self, player_id: &str) -> Result<bool, TeamError> {
        let teams = self.repository.list_teams().await?;
        Ok(!teams.iter().any(|team| team.has_player(player_id)))
    }
}
