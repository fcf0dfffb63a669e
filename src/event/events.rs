use serde::{Deserialize, Serialize};

use crate::{matches::MatchModel, stats::StatsRecord, team::TeamModel};

/// Facts about data that has already changed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum FantasyEvent {
    StatsUpdated { record: StatsRecord },
    StatsDeleted { id: String },
    TeamUpdated { team: TeamModel },
    MatchCreated { r#match: MatchModel },
    MatchUpdated { r#match: MatchModel },
    MatchDeleted { id: String },
}

impl FantasyEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            FantasyEvent::StatsUpdated { .. } => "statsUpdated",
            FantasyEvent::StatsDeleted { .. } => "statsDeleted",
            FantasyEvent::TeamUpdated { .. } => "teamUpdated",
            FantasyEvent::MatchCreated { .. } => "matchCreated",
            FantasyEvent::MatchUpdated { .. } => "matchUpdated",
            FantasyEvent::MatchDeleted { .. } => "matchDeleted",
        }
    }
}
