use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use super::{
    aggregator, CaptainRef, LeaderboardEntry, LeaderboardError, PointsRecord, Roster,
    UserBreakdown,
};
use crate::{
    matches::{repository::MatchRepository, MatchModel},
    player::repository::PlayerRepository,
    stats::{StatsError, StatsRepository},
    team::{repository::TeamRepository, TeamModel},
    user::repository::UserRepository,
};

impl From<StatsError> for LeaderboardError {
    fn from(err: StatsError) -> Self {
        LeaderboardError::Repository(err.to_string())
    }
}

/// Reads point-in-time snapshots from the stores and hands them to the
/// aggregator. Snapshots are taken one store at a time and may disagree
/// slightly; the result is a view that can always be recomputed.
pub struct LeaderboardService {
    team_repository: Arc<dyn TeamRepository>,
    user_repository: Arc<dyn UserRepository>,
    player_repository: Arc<dyn PlayerRepository>,
    match_repository: Arc<dyn MatchRepository>,
    stats_repository: Arc<dyn StatsRepository>,
}

impl LeaderboardService {
    pub fn new(
        team_repository: Arc<dyn TeamRepository>,
        user_repository: Arc<dyn UserRepository>,
        player_repository: Arc<dyn PlayerRepository>,
        match_repository: Arc<dyn MatchRepository>,
        stats_repository: Arc<dyn StatsRepository>,
    ) -> Self {
        Self {
            team_repository,
            user_repository,
            player_repository,
            match_repository,
            stats_repository,
        }
    }

    async fn points_records(&self) -> Result<Vec<PointsRecord>, LeaderboardError> {
        Ok(self
            .stats_repository
            .list_stats()
            .await?
            .iter()
            .map(|record| record.points_record())
            .collect())
    }

    async fn player_names(&self) -> Result<HashMap<String, String>, LeaderboardError> {
        Ok(self
            .player_repository
            .list_players()
            .await?
            .into_iter()
            .map(|player| (player.id, player.name))
            .collect())
    }

    /// `None` when the owning user no longer exists
    async fn roster_for(
        &self,
        team: TeamModel,
        player_names: &HashMap<String, String>,
    ) -> Result<Option<Roster>, LeaderboardError> {
        let Some(user) = self.user_repository.get_user(&team.user_id).await? else {
            return Ok(None);
        };

        let captain = player_names.get(&team.captain_id).map(|name| CaptainRef {
            id: team.captain_id.clone(),
            name: name.clone(),
        });

        Ok(Some(Roster {
            user_id: user.id,
            username: user.username,
            player_ids: team.player_ids,
            captain,
        }))
    }

    #[instrument(skip(self))]
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let player_names = self.player_names().await?;

        let mut rosters = Vec::new();
        for team in self.team_repository.list_teams().await? {
            let user_id = team.user_id.clone();
            match self.roster_for(team, &player_names).await? {
                Some(roster) => rosters.push(roster),
                None => warn!(user_id = %user_id, "Skipping team of unknown user"),
            }
        }

        let records = self.points_records().await?;
        let entries = aggregator::compute_leaderboard(&rosters, &records);

        debug!(
            rosters = rosters.len(),
            entries = entries.len(),
            "Leaderboard computed"
        );
        Ok(entries)
    }

    #[instrument(skip(self))]
    pub async fn user_breakdown(&self, user_id: &str) -> Result<UserBreakdown, LeaderboardError> {
        let team = self
            .team_repository
            .get_team_by_user(user_id)
            .await?
            .ok_or_else(|| LeaderboardError::NotFound(format!("Team not found for user {user_id}")))?;

        let player_names = self.player_names().await?;
        let roster = self
            .roster_for(team, &player_names)
            .await?
            .ok_or_else(|| LeaderboardError::NotFound(format!("User {user_id} not found")))?;

        let records = self.points_records().await?;
        let mut breakdown = aggregator::compute_user_breakdown(user_id, &[roster], &records)?;

        let mut fixtures: HashMap<String, MatchModel> = self
            .match_repository
            .list_matches()
            .await?
            .into_iter()
            .map(|game| (game.id.clone(), game))
            .collect();

        for group in &mut breakdown.match_breakdown {
            group.fixture = fixtures.remove(&group.match_id);
            for line in &mut group.players {
                line.player_name = player_names.get(&line.player_id).cloned();
            }
        }

        debug!(
            matches = breakdown.match_breakdown.len(),
            "User breakdown resolved"
        );
        Ok(breakdown)
    }
}
