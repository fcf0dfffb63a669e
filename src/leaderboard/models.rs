use serde::{Deserialize, Serialize};

use crate::matches::MatchModel;
use crate::scoring::FantasyPoints;

/// One scored performance: the aggregator's view of a stats record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsRecord {
    pub player_id: String,
    pub match_id: String,
    pub points: FantasyPoints,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptainRef {
    pub id: String,
    pub name: String,
}

/// A user's selection as handed to the aggregator.
///
/// `captain` is `None` when the captain could not be resolved against the
/// player directory. Composition rules are not re-checked here.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    pub user_id: String,
    pub username: String,
    pub player_ids: Vec<String>,
    pub captain: Option<CaptainRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTotal {
    pub match_id: String,
    pub points: f64,
}

/// Public leaderboard row. Carries no player list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub username: String,
    pub total_points: f64,
    pub match_breakdown: Vec<MatchTotal>,
    pub captain: CaptainRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatchPoints {
    pub player_id: String,
    /// Filled in by the service from the player directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    pub points: f64,
    pub is_captain: bool,
    pub final_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBreakdown {
    pub match_id: String,
    /// Filled in by the service from the match store
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub fixture: Option<MatchModel>,
    pub players: Vec<PlayerMatchPoints>,
    pub total_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBreakdown {
    pub user_id: String,
    pub username: String,
    pub total_points: f64,
    pub match_breakdown: Vec<MatchBreakdown>,
    pub captain: CaptainRef,
}
