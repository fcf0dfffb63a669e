use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::leaderboard::CaptainRef;

/// A user's stored selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamModel {
    pub id: String,
    pub user_id: String,
    pub player_ids: Vec<String>,
    pub captain_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TeamModel {
    pub fn new(user_id: String, player_ids: Vec<String>, captain_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            player_ids,
            captain_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_player(&self, player_id: &str) -> bool {
        self.player_ids.iter().any(|id| id == player_id)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveTeamRequest {
    pub user_id: String,
    pub players: Vec<String>,
    pub captain: String,
}

/// What other users may see of a team: no player list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub user_id: String,
    pub username: Option<String>,
    pub captain: Option<CaptainRef>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}
