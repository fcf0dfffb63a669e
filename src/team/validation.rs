use std::collections::{HashMap, HashSet};

use super::TeamError;
use crate::player::models::PlayerModel;

pub const ROSTER_SIZE: usize = 20;
pub const MAX_PLAYERS_PER_COUNTRY: usize = 2;

/// Checks team composition against the player directory.
///
/// Rules are checked in order: size, duplicates, known players, country
/// quota, captain membership. The first broken rule is reported.
pub fn validate_roster(
    player_ids: &[String],
    captain_id: &str,
    directory: &HashMap<String, PlayerModel>,
) -> Result<(), TeamError> {
    if player_ids.len() != ROSTER_SIZE {
        return Err(TeamError::WrongSize {
            expected: ROSTER_SIZE,
            actual: player_ids.len(),
        });
    }

    let mut seen: HashSet<&String> = HashSet::new();
    if let Some(duplicate) = player_ids.iter().find(|id| !seen.insert(*id)) {
        return Err(TeamError::DuplicatePlayer(duplicate.clone()));
    }

    let mut per_country: HashMap<&str, usize> = HashMap::new();
    for player_id in player_ids {
        let player = directory
            .get(player_id)
            .ok_or_else(|| TeamError::UnknownPlayer(player_id.clone()))?;

        let count = per_country.entry(player.country.as_str()).or_default();
        *count += 1;
        if *count > MAX_PLAYERS_PER_COUNTRY {
            return Err(TeamError::CountryLimit {
                country: player.country.clone(),
                limit: MAX_PLAYERS_PER_COUNTRY,
            });
        }
    }

    if !player_ids.iter().any(|id| id == captain_id) {
        return Err(TeamError::CaptainNotInTeam);
    }

    Ok(())
}
