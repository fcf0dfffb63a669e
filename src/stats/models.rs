use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::leaderboard::PointsRecord;
use crate::scoring::{compute_points, FantasyPoints, PerformanceStats, ScoringError};

/// Stats of one player in one match together with the points they earn.
///
/// Never edited in place: a change produces a new record that replaces the
/// old one under the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRecord {
    pub id: String,
    pub match_id: String,
    pub player_id: String,
    #[serde(flatten)]
    pub stats: PerformanceStats,
    pub fantasy_points: FantasyPoints,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StatsRecord {
    pub fn new(
        match_id: String,
        player_id: String,
        stats: PerformanceStats,
    ) -> Result<Self, ScoringError> {
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            match_id,
            player_id,
            fantasy_points: compute_points(&stats)?,
            stats,
            created_at: now,
            updated_at: now,
        })
    }

    /// A copy carrying new stats and freshly computed points
    pub fn rescored(&self, stats: PerformanceStats) -> Result<Self, ScoringError> {
        Ok(Self {
            id: self.id.clone(),
            match_id: self.match_id.clone(),
            player_id: self.player_id.clone(),
            fantasy_points: compute_points(&stats)?,
            stats,
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }

    pub fn is_for(&self, match_id: &str, player_id: &str) -> bool {
        self.match_id == match_id && self.player_id == player_id
    }

    pub fn points_record(&self) -> PointsRecord {
        PointsRecord {
            player_id: self.player_id.clone(),
            match_id: self.match_id.clone(),
            points: self.fantasy_points,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertStatsRequest {
    pub match_id: String,
    pub player_id: String,
    #[serde(flatten)]
    pub stats: PerformanceStats,
}

/// Partial edit of a stats record; absent fields keep their value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPatch {
    pub runs: Option<u32>,
    pub balls_faced: Option<u32>,
    pub fours: Option<u32>,
    pub sixes: Option<u32>,
    pub wickets: Option<u32>,
    pub overs_bowled: Option<f64>,
    pub runs_conceded: Option<u32>,
    pub dot_balls: Option<u32>,
    pub maidens: Option<u32>,
    pub catches: Option<u32>,
    pub runouts: Option<u32>,
    pub runout_assists: Option<u32>,
    pub stumpings: Option<u32>,
}

impl StatsPatch {
    pub fn apply(&self, base: &PerformanceStats) -> PerformanceStats {
        let mut stats = *base;

        let batting = &mut stats.batting;
        batting.runs = self.runs.unwrap_or(batting.runs);
        batting.balls_faced = self.balls_faced.unwrap_or(batting.balls_faced);
        batting.fours = self.fours.unwrap_or(batting.fours);
        batting.sixes = self.sixes.unwrap_or(batting.sixes);

        let bowling = &mut stats.bowling;
        bowling.wickets = self.wickets.unwrap_or(bowling.wickets);
        bowling.overs_bowled = self.overs_bowled.unwrap_or(bowling.overs_bowled);
        bowling.runs_conceded = self.runs_conceded.unwrap_or(bowling.runs_conceded);
        bowling.dot_balls = self.dot_balls.unwrap_or(bowling.dot_balls);
        bowling.maidens = self.maidens.unwrap_or(bowling.maidens);

        let fielding = &mut stats.fielding;
        fielding.catches = self.catches.unwrap_or(fielding.catches);
        fielding.runouts = self.runouts.unwrap_or(fielding.runouts);
        fielding.runout_assists = self.runout_assists.unwrap_or(fielding.runout_assists);
        fielding.stumpings = self.stumpings.unwrap_or(fielding.stumpings);

        stats
    }
}
