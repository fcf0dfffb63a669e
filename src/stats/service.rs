use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use super::{
    repository::{StatsRepository, UpsertOutcome},
    StatsError, StatsPatch, StatsRecord, UpsertStatsRequest,
};
use crate::{
    event::{EventBus, FantasyEvent},
    matches::repository::MatchRepository,
    player::repository::PlayerRepository,
};

/// Records match stats and keeps their fantasy points current
pub struct StatsService {
    repository: Arc<dyn StatsRepository>,
    match_repository: Arc<dyn MatchRepository>,
    player_repository: Arc<dyn PlayerRepository>,
    event_bus: EventBus,
}

impl StatsService {
    pub fn new(
        repository: Arc<dyn StatsRepository>,
        match_repository: Arc<dyn MatchRepository>,
        player_repository: Arc<dyn PlayerRepository>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            repository,
            match_repository,
            player_repository,
            event_bus,
        }
    }

    /// Creates or replaces the stats of one player in one match
    #[instrument(skip(self, request), fields(match_id = %request.match_id, player_id = %request.player_id))]
    pub async fn record_stats(&self, request: UpsertStatsRequest) -> Result<StatsRecord, StatsError> {
        if self.match_repository.get_match(&request.match_id).await?.is_none() {
            return Err(StatsError::NotFound(format!("Match {}", request.match_id)));
        }
        if self
            .player_repository
            .get_player(&request.player_id)
            .await?
            .is_none()
        {
            return Err(StatsError::NotFound(format!("Player {}", request.player_id)));
        }

        let outcome = self
            .repository
            .upsert_stats(&request.match_id, &request.player_id, request.stats)
            .await?;

        let replaced = matches!(outcome, UpsertOutcome::Replaced(_));
        let record = outcome.into_record();

        info!(
            stats_id = %record.id,
            fantasy_points = %record.fantasy_points,
            replaced,
            "Stats recorded"
        );
        self.event_bus.emit(FantasyEvent::StatsUpdated {
            record: record.clone(),
        });

        Ok(record)
    }

    #[instrument(skip(self, patch))]
    pub async fn update_stats(&self, id: &str, patch: &StatsPatch) -> Result<StatsRecord, StatsError> {
        let record = self.repository.patch_stats(id, patch).await?;

        info!(stats_id = %record.id, fantasy_points = %record.fantasy_points, "Stats updated");
        self.event_bus.emit(FantasyEvent::StatsUpdated {
            record: record.clone(),
        });

        Ok(record)
    }

    #[instrument(skip(self))]
    pub async fn delete_stats(&self, id: &str) -> Result<(), StatsError> {
        self.repository
            .delete_stats(id)
            .await?
            .ok_or_else(|| StatsError::NotFound("Stats".to_string()))?;

        self.event_bus.emit(FantasyEvent::StatsDeleted { id: id.to_string() });
        Ok(())
    }

    /// Kickoff of every known match, keyed by id
    async fn match_dates(&self) -> Result<HashMap<String, (DateTime<Utc>, u32)>, StatsError> {
        Ok(self
            .match_repository
            .list_matches()
            .await?
            .into_iter()
            .map(|game| (game.id, (game.date, game.match_number)))
            .collect())
    }

    /// Latest match first, best performance first within a match
    pub async fn list_all(&self) -> Result<Vec<StatsRecord>, StatsError> {
        let dates = self.match_dates().await?;
        let mut records = self.repository.list_stats().await?;
        records.sort_by(|a, b| {
            latest_match_first(&dates, a, b)
                .then_with(|| b.fantasy_points.value().total_cmp(&a.fantasy_points.value()))
        });
        Ok(records)
    }

    /// Best performance first
    pub async fn list_for_match(&self, match_id: &str) -> Result<Vec<StatsRecord>, StatsError> {
        let mut records: Vec<StatsRecord> = self
            .repository
            .list_stats()
            .await?
            .into_iter()
            .filter(|record| record.match_id == match_id)
            .collect();
        records.sort_by(|a, b| b.fantasy_points.value().total_cmp(&a.fantasy_points.value()));
        Ok(records)
    }

    /// Latest match first
    pub async fn list_for_player(&self, player_id: &str) -> Result<Vec<StatsRecord>, StatsError> {
        let dates = self.match_dates().await?;
        let mut records: Vec<StatsRecord> = self
            .repository
            .list_stats()
            .await?
            .into_iter()
            .filter(|record| record.player_id == player_id)
            .collect();
        records.sort_by(|a, b| latest_match_first(&dates, a, b));
        Ok(records)
    }
}

/// Orders by match date, then match number, newest first. Records of
/// deleted matches sort last.
fn latest_match_first(
    dates: &HashMap<String, (DateTime<Utc>, u32)>,
    a: &StatsRecord,
    b: &StatsRecord,
) -> Ordering {
    dates.get(&b.match_id).cmp(&dates.get(&a.match_id))
}
