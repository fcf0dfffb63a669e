use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum PlayerRole {
    Batsman,
    Bowler,
    #[serde(rename = "All-rounder")]
    #[strum(to_string = "All-rounder")]
    AllRounder,
    #[serde(rename = "Wicket-keeper")]
    #[strum(to_string = "Wicket-keeper")]
    WicketKeeper,
}

/// A selectable cricketer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerModel {
    pub id: String,
    pub name: String,
    pub country: String,
    pub role: PlayerRole,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PlayerModel {
    pub fn new(name: String, country: String, role: PlayerRole, created_by: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            country,
            role,
            created_by,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    pub name: String,
    pub country: String,
    pub role: PlayerRole,
    pub created_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn role_names_match_wire_format() {
        for role in PlayerRole::iter() {
            let wire = serde_json::to_value(role).unwrap();
            assert_eq!(wire.as_str().unwrap(), role.to_string());
            assert_eq!(PlayerRole::from_str(&role.to_string()).unwrap(), role);
        }
    }

    #[test]
    fn parses_hyphenated_roles() {
        let role: PlayerRole = serde_json::from_str(r#""Wicket-keeper""#).unwrap();
        assert_eq!(role, PlayerRole::WicketKeeper);
    }
}
