use serde::{Deserialize, Serialize};
use std::fmt;

use super::ScoringError;

const MAX_WICKETS: u32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BattingStats {
    pub runs: u32,
    pub balls_faced: u32,
    pub fours: u32,
    pub sixes: u32,
}

impl BattingStats {
    /// Runs per 100 balls, `None` when no balls were faced
    pub fn strike_rate(&self) -> Option<f64> {
        if self.balls_faced == 0 {
            return None;
        }
        Some(f64::from(self.runs) / f64::from(self.balls_faced) * 100.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BowlingStats {
    pub wickets: u32,
    /// Overs as a plain decimal, e.g. `3.4` is taken as 3.4 overs
    pub overs_bowled: f64,
    pub runs_conceded: u32,
    pub dot_balls: u32,
    pub maidens: u32,
}

impl BowlingStats {
    /// Runs conceded per over, `None` when nothing was bowled
    pub fn economy(&self) -> Option<f64> {
        if self.overs_bowled <= 0.0 {
            return None;
        }
        Some(f64::from(self.runs_conceded) / self.overs_bowled)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldingStats {
    pub catches: u32,
    pub runouts: u32,
    pub runout_assists: u32,
    pub stumpings: u32,
}

/// Finalized statistics of one player in one match.
///
/// Serialized flat, so a JSON body carries `runs`, `wickets`, `catches` etc.
/// side by side. Missing fields default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStats {
    #[serde(flatten)]
    pub batting: BattingStats,
    #[serde(flatten)]
    pub bowling: BowlingStats,
    #[serde(flatten)]
    pub fielding: FieldingStats,
}

impl PerformanceStats {
    /// Rejects values the scoring rules are not defined over.
    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.batting.runs > 0 && self.batting.balls_faced == 0 {
            return Err(ScoringError::InvalidInput(format!(
                "runs ({}) recorded without any balls faced",
                self.batting.runs
            )));
        }

        if self.bowling.wickets > MAX_WICKETS {
            return Err(ScoringError::InvalidInput(format!(
                "wickets must be between 0 and {MAX_WICKETS}, got {}",
                self.bowling.wickets
            )));
        }

        let overs = self.bowling.overs_bowled;
        if !overs.is_finite() || overs < 0.0 {
            return Err(ScoringError::InvalidInput(format!(
                "oversBowled must be a non-negative number, got {overs}"
            )));
        }

        Ok(())
    }
}

/// Fantasy points for one (player, match) performance, kept at one decimal place.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FantasyPoints(f64);

impl FantasyPoints {
    pub fn new(value: f64) -> Self {
        Self(super::round_to_tenth(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<FantasyPoints> for f64 {
    fn from(points: FantasyPoints) -> Self {
        points.0
    }
}

impl fmt::Display for FantasyPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_flat_body_with_defaults() {
        let stats: PerformanceStats =
            serde_json::from_str(r#"{"runs": 12, "ballsFaced": 9, "wickets": 1, "catches": 2}"#)
                .unwrap();

        assert_eq!(stats.batting.runs, 12);
        assert_eq!(stats.batting.balls_faced, 9);
        assert_eq!(stats.batting.sixes, 0);
        assert_eq!(stats.bowling.wickets, 1);
        assert_eq!(stats.bowling.overs_bowled, 0.0);
        assert_eq!(stats.fielding.catches, 2);
    }

    #[test]
    fn rejects_negative_counts_at_deserialization() {
        let result = serde_json::from_str::<PerformanceStats>(r#"{"runs": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_runs_without_balls() {
        let stats = PerformanceStats {
            batting: BattingStats {
                runs: 4,
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(matches!(
            stats.validate(),
            Err(ScoringError::InvalidInput(_))
        ));
    }

    #[test]
    fn validate_rejects_more_than_ten_wickets() {
        let stats = PerformanceStats {
            bowling: BowlingStats {
                wickets: 11,
                overs_bowled: 4.0,
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(stats.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_or_non_finite_overs() {
        for overs in [-1.0, f64::NAN, f64::INFINITY] {
            let stats = PerformanceStats {
                bowling: BowlingStats {
                    overs_bowled: overs,
                    ..Default::default()
                },
                ..Default::default()
            };
            assert!(stats.validate().is_err(), "overs {overs} should be rejected");
        }
    }

    #[test]
    fn validate_accepts_empty_line() {
        assert_eq!(PerformanceStats::default().validate(), Ok(()));
    }

    #[test]
    fn strike_rate_and_economy_need_a_denominator() {
        assert_eq!(BattingStats::default().strike_rate(), None);
        assert_eq!(BowlingStats::default().economy(), None);

        let bowling = BowlingStats {
            overs_bowled: 4.0,
            runs_conceded: 30,
            ..Default::default()
        };
        assert_eq!(bowling.economy(), Some(7.5));
    }

    #[test]
    fn fantasy_points_display_one_decimal() {
        assert_eq!(FantasyPoints::new(78.0).to_string(), "78.0");
        assert_eq!(FantasyPoints::new(12.34).value(), 12.3);
    }
}
