use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::{StatsError, StatsPatch, StatsRecord};
use crate::scoring::PerformanceStats;

/// Outcome of writing stats for a (match, player) pair
#[derive(Debug, Clone, PartialEq)]
pub enum UpsertOutcome {
    Created(StatsRecord),
    Replaced(StatsRecord),
}

impl UpsertOutcome {
    pub fn into_record(self) -> StatsRecord {
        match self {
            UpsertOutcome::Created(record) | UpsertOutcome::Replaced(record) => record,
        }
    }
}

/// Store of stats records, unique per (match, player).
///
/// Writes score the stats and swap the whole record while holding the write
/// lock, so readers never see stats and points out of step.
#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn upsert_stats(
        &self,
        match_id: &str,
        player_id: &str,
        stats: PerformanceStats,
    ) -> Result<UpsertOutcome, StatsError>;

    async fn patch_stats(&self, id: &str, patch: &StatsPatch) -> Result<StatsRecord, StatsError>;

    async fn get_stats(&self, id: &str) -> Result<Option<StatsRecord>, StatsError>;

    async fn delete_stats(&self, id: &str) -> Result<Option<StatsRecord>, StatsError>;

    /// In recording order, oldest first
    async fn list_stats(&self) -> Result<Vec<StatsRecord>, StatsError>;
}

#[derive(Debug, Default)]
pub struct InMemoryStatsRepository {
    /// Insertion order; a replaced record keeps its slot
    records: Arc<RwLock<Vec<StatsRecord>>>,
}

impl InMemoryStatsRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl StatsRepository for InMemoryStatsRepository {
    #[instrument(skip(self, stats))]
    async fn upsert_stats(
        &self,
        match_id: &str,
        player_id: &str,
        stats: PerformanceStats,
    ) -> Result<UpsertOutcome, StatsError> {
        let mut records = self.records.write().await;

        let outcome = match records
            .iter_mut()
            .find(|record| record.is_for(match_id, player_id))
        {
            Some(current) => {
                let replaced = current.rescored(stats)?;
                *current = replaced.clone();
                UpsertOutcome::Replaced(replaced)
            }
            None => {
                let created =
                    StatsRecord::new(match_id.to_string(), player_id.to_string(), stats)?;
                records.push(created.clone());
                UpsertOutcome::Created(created)
            }
        };

        let record = match &outcome {
            UpsertOutcome::Created(record) | UpsertOutcome::Replaced(record) => record,
        };
        debug!(
            stats_id = %record.id,
            fantasy_points = %record.fantasy_points,
            "Stats stored in memory"
        );
        Ok(outcome)
    }

    #[instrument(skip(self, patch))]
    async fn patch_stats(&self, id: &str, patch: &StatsPatch) -> Result<StatsRecord, StatsError> {
        let mut records = self.records.write().await;

        let current = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| StatsError::NotFound("Stats".to_string()))?;
        let updated = current.rescored(patch.apply(&current.stats))?;

        *current = updated.clone();
        Ok(updated)
    }

    async fn get_stats(&self, id: &str) -> Result<Option<StatsRecord>, StatsError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|record| record.id == id)
            .cloned())
    }

    #[instrument(skip(self))]
    async fn delete_stats(&self, id: &str) -> Result<Option<StatsRecord>, StatsError> {
        let mut records = self.records.write().await;
        Ok(records
            .iter()
            .position(|record| record.id == id)
            .map(|index| records.remove(index)))
    }

    async fn list_stats(&self) -> Result<Vec<StatsRecord>, StatsError> {
        Ok(self.records.read().await.clone())
    }
}
