use std::collections::{HashMap, HashSet};

use tracing::warn;

use super::{
    CaptainRef, LeaderboardEntry, LeaderboardError, MatchBreakdown, MatchTotal,
    PlayerMatchPoints, PointsRecord, Roster, UserBreakdown,
};
use crate::scoring::round_to_tenth;

const CAPTAIN_MULTIPLIER: f64 = 2.0;

/// Unrounded per-match sums for one roster, in first-seen match order.
struct MatchTally {
    match_id: String,
    players: Vec<PlayerMatchPoints>,
    total: f64,
}

fn tally_matches(roster: &Roster, captain: &CaptainRef, records: &[PointsRecord]) -> Vec<MatchTally> {
    let members: HashSet<&str> = roster.player_ids.iter().map(String::as_str).collect();

    let mut tallies: Vec<MatchTally> = Vec::new();
    let mut index_by_match: HashMap<&str, usize> = HashMap::new();

    for record in records
        .iter()
        .filter(|record| members.contains(record.player_id.as_str()))
    {
        let index = *index_by_match
            .entry(record.match_id.as_str())
            .or_insert_with(|| {
                tallies.push(MatchTally {
                    match_id: record.match_id.clone(),
                    players: Vec::new(),
                    total: 0.0,
                });
                tallies.len() - 1
            });
        let tally = &mut tallies[index];

        let points = record.points.value();
        match tally
            .players
            .iter_mut()
            .find(|player| player.player_id == record.player_id)
        {
            Some(player) => player.points += points,
            None => tally.players.push(PlayerMatchPoints {
                player_id: record.player_id.clone(),
                player_name: None,
                points,
                is_captain: record.player_id == captain.id,
                final_points: 0.0,
            }),
        }
    }

    // Multiplier goes on each player's match sum, once per match
    for tally in &mut tallies {
        for player in &mut tally.players {
            player.final_points = if player.is_captain {
                player.points * CAPTAIN_MULTIPLIER
            } else {
                player.points
            };
        }
        tally.total = tally.players.iter().map(|player| player.final_points).sum();
    }

    tallies
}

fn overall_total(tallies: &[MatchTally]) -> f64 {
    round_to_tenth(tallies.iter().map(|tally| tally.total).sum())
}

/// Ranks every roster by total points, highest first.
///
/// Rosters without a resolved captain are left out. Equal totals keep their
/// input order, so the ranking is not a total order.
pub fn compute_leaderboard(rosters: &[Roster], records: &[PointsRecord]) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = rosters
        .iter()
        .filter_map(|roster| {
            let Some(captain) = roster.captain.as_ref() else {
                warn!(user_id = %roster.user_id, "Skipping roster with unresolved captain");
                return None;
            };

            let tallies = tally_matches(roster, captain, records);

            Some(LeaderboardEntry {
                user_id: roster.user_id.clone(),
                username: roster.username.clone(),
                total_points: overall_total(&tallies),
                match_breakdown: tallies
                    .into_iter()
                    .map(|tally| MatchTotal {
                        match_id: tally.match_id,
                        points: round_to_tenth(tally.total),
                    })
                    .collect(),
                captain: captain.clone(),
            })
        })
        .collect();

    entries.sort_by(|a, b| b.total_points.total_cmp(&a.total_points));
    entries
}

/// Per-match, per-player detail for one user's roster.
pub fn compute_user_breakdown(
    user_id: &str,
    rosters: &[Roster],
    records: &[PointsRecord],
) -> Result<UserBreakdown, LeaderboardError> {
    let roster = rosters
        .iter()
        .find(|roster| roster.user_id == user_id)
        .ok_or_else(|| LeaderboardError::NotFound(format!("Team not found for user {user_id}")))?;

    let captain = roster.captain.as_ref().ok_or_else(|| {
        LeaderboardError::NotFound(format!("Captain not resolvable for user {user_id}"))
    })?;

    let tallies = tally_matches(roster, captain, records);
    let total_points = overall_total(&tallies);

    let match_breakdown = tallies
        .into_iter()
        .map(|tally| MatchBreakdown {
            match_id: tally.match_id,
            fixture: None,
            players: tally
                .players
                .into_iter()
                .map(|player| PlayerMatchPoints {
                    points: round_to_tenth(player.points),
                    final_points: round_to_tenth(player.final_points),
                    ..player
                })
                .collect(),
            total_points: round_to_tenth(tally.total),
        })
        .collect();

    Ok(UserBreakdown {
        user_id: roster.user_id.clone(),
        username: roster.username.clone(),
        total_points,
        match_breakdown,
        captain: captain.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::FantasyPoints;

    fn record(player_id: &str, match_id: &str, points: f64) -> PointsRecord {
        PointsRecord {
            player_id: player_id.into(),
            match_id: match_id.into(),
            points: FantasyPoints::new(points),
        }
    }

    fn roster(user_id: &str, players: &[&str], captain: Option<&str>) -> Roster {
        Roster {
            user_id: user_id.into(),
            username: format!("{user_id}-name"),
            player_ids: players.iter().map(|p| p.to_string()).collect(),
            captain: captain.map(|id| CaptainRef {
                id: id.into(),
                name: format!("{id}-name"),
            }),
        }
    }

    #[test]
    fn captain_doubled_once_per_match() {
        let rosters = vec![roster("alice", &["p1", "p2"], Some("p1"))];
        let records = vec![
            record("p1", "m1", 10.0),
            record("p2", "m1", 5.0),
            record("p1", "m2", 20.0),
        ];

        let board = compute_leaderboard(&rosters, &records);

        assert_eq!(board.len(), 1);
        assert_eq!(
            board[0].match_breakdown,
            vec![
                MatchTotal {
                    match_id: "m1".into(),
                    points: 25.0
                },
                MatchTotal {
                    match_id: "m2".into(),
                    points: 40.0
                },
            ]
        );
        assert_eq!(board[0].total_points, 65.0);
    }

    #[test]
    fn ignores_points_of_players_outside_roster() {
        let rosters = vec![roster("alice", &["p1"], Some("p1"))];
        let records = vec![record("p1", "m1", 3.0), record("other", "m1", 100.0)];

        let board = compute_leaderboard(&rosters, &records);
        assert_eq!(board[0].total_points, 6.0);
    }

    #[test]
    fn roster_without_points_scores_zero() {
        let rosters = vec![roster("alice", &["p1"], Some("p1"))];

        let board = compute_leaderboard(&rosters, &[]);
        assert_eq!(board[0].total_points, 0.0);
        assert!(board[0].match_breakdown.is_empty());
    }

    #[test]
    fn sorts_descending_and_keeps_ties() {
        let rosters = vec![
            roster("low", &["p1"], Some("p1")),
            roster("tie-a", &["p2"], Some("p2")),
            roster("tie-b", &["p3"], Some("p3")),
        ];
        let records = vec![
            record("p1", "m1", 1.0),
            record("p2", "m1", 7.0),
            record("p3", "m1", 7.0),
        ];

        let board = compute_leaderboard(&rosters, &records);
        let order: Vec<_> = board.iter().map(|e| e.user_id.as_str()).collect();

        assert_eq!(order, vec!["tie-a", "tie-b", "low"]);
    }

    #[test]
    fn skips_roster_with_unresolved_captain() {
        let rosters = vec![
            roster("alice", &["p1"], Some("p1")),
            roster("broken", &["p2"], None),
        ];
        let records = vec![record("p1", "m1", 4.0), record("p2", "m1", 50.0)];

        let board = compute_leaderboard(&rosters, &records);
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].user_id, "alice");
    }

    #[test]
    fn captain_outside_roster_is_tolerated() {
        let rosters = vec![roster("alice", &["p1"], Some("ghost"))];
        let records = vec![record("p1", "m1", 4.0), record("ghost", "m1", 30.0)];

        let board = compute_leaderboard(&rosters, &records);
        assert_eq!(board[0].total_points, 4.0);
    }

    #[test]
    fn totals_are_rounded_to_one_decimal() {
        let rosters = vec![roster("alice", &["p1", "p2", "p3"], Some("p3"))];
        let records = vec![
            record("p1", "m1", 0.1),
            record("p2", "m1", 0.2),
            record("p3", "m1", 0.0),
        ];

        let board = compute_leaderboard(&rosters, &records);
        assert_eq!(board[0].match_breakdown[0].points, 0.3);
        assert_eq!(board[0].total_points, 0.3);
    }

    #[test]
    fn duplicate_roster_members_count_once() {
        let rosters = vec![roster("alice", &["p1", "p1"], Some("p1"))];
        let records = vec![record("p1", "m1", 5.0)];

        let board = compute_leaderboard(&rosters, &records);
        assert_eq!(board[0].total_points, 10.0);
    }

    #[test]
    fn breakdown_lists_players_per_match() {
        let rosters = vec![roster("alice", &["p1", "p2"], Some("p2"))];
        let records = vec![
            record("p1", "m1", 12.5),
            record("p2", "m1", 8.0),
            record("p2", "m2", -4.0),
        ];

        let breakdown = compute_user_breakdown("alice", &rosters, &records).unwrap();

        assert_eq!(breakdown.total_points, 12.5 + 16.0 - 8.0);
        assert_eq!(breakdown.match_breakdown.len(), 2);

        let first = &breakdown.match_breakdown[0];
        assert_eq!(first.match_id, "m1");
        assert_eq!(first.total_points, 28.5);
        assert_eq!(
            first.players[1],
            PlayerMatchPoints {
                player_id: "p2".into(),
                player_name: None,
                points: 8.0,
                is_captain: true,
                final_points: 16.0,
            }
        );
        assert!(!first.players[0].is_captain);

        let second = &breakdown.match_breakdown[1];
        assert_eq!(second.total_points, -8.0);
    }

    #[test]
    fn breakdown_total_matches_leaderboard_total() {
        let rosters = vec![roster("alice", &["p1", "p2"], Some("p1"))];
        let records = vec![
            record("p1", "m1", 33.5),
            record("p2", "m1", 21.0),
            record("p1", "m2", 7.0),
        ];

        let board = compute_leaderboard(&rosters, &records);
        let breakdown = compute_user_breakdown("alice", &rosters, &records).unwrap();
        assert_eq!(board[0].total_points, breakdown.total_points);
    }

    #[test]
    fn breakdown_for_unknown_user_is_not_found() {
        let rosters = vec![roster("alice", &["p1"], Some("p1"))];

        let result = compute_user_breakdown("bob", &rosters, &[]);
        assert!(matches!(result, Err(LeaderboardError::NotFound(_))));
    }

    #[test]
    fn breakdown_without_captain_is_not_found() {
        let rosters = vec![roster("alice", &["p1"], None)];

        let result = compute_user_breakdown("alice", &rosters, &[]);
        assert!(matches!(result, Err(LeaderboardError::NotFound(_))));
    }
}
