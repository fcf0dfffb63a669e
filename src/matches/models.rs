use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Upcoming,
    Live,
    Completed,
}

/// A fixture between two national sides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchModel {
    pub id: String,
    pub match_number: u32,
    pub team1: String,
    pub team2: String,
    pub date: DateTime<Utc>,
    pub venue: String,
    pub status: MatchStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchRequest {
    pub match_number: u32,
    pub team1: String,
    pub team2: String,
    pub date: DateTime<Utc>,
    pub venue: String,
    #[serde(default)]
    pub status: MatchStatus,
}

impl CreateMatchRequest {
    pub fn into_model(self) -> MatchModel {
        MatchModel {
            id: Uuid::new_v4().to_string(),
            match_number: self.match_number,
            team1: self.team1,
            team2: self.team2,
            date: self.date,
            venue: self.venue,
            status: self.status,
            created_at: Utc::now(),
        }
    }
}

/// Partial update; absent fields keep their value
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMatchRequest {
    pub match_number: Option<u32>,
    pub team1: Option<String>,
    pub team2: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub venue: Option<String>,
    pub status: Option<MatchStatus>,
}

impl UpdateMatchRequest {
    pub fn apply(self, current: &MatchModel) -> MatchModel {
        MatchModel {
            id: current.id.clone(),
            match_number: self.match_number.unwrap_or(current.match_number),
            team1: self.team1.unwrap_or_else(|| current.team1.clone()),
            team2: self.team2.unwrap_or_else(|| current.team2.clone()),
            date: self.date.unwrap_or(current.date),
            venue: self.venue.unwrap_or_else(|| current.venue.clone()),
            status: self.status.unwrap_or(current.status),
            created_at: current.created_at,
        }
    }
}
