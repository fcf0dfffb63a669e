use super::super::{
    round_to_tenth,
    tiers::{Tier, TierTable},
    BowlingStats, PerformanceStats, PointsCalculator,
};

const WICKET_POINTS: f64 = 18.0;
const DOT_BALL_POINTS: f64 = 1.0;
const MAIDEN_POINTS: f64 = 12.0;
/// Economy is only judged once a bowler has sent down this many overs
const ECONOMY_MIN_OVERS: f64 = 2.0;

pub const WICKET_MILESTONE_BONUS: TierTable = TierTable::new(
    &[
        Tier::at_least(5.0, 35.0),
        Tier::at_least(4.0, 20.0),
        Tier::at_least(3.0, 12.0),
        Tier::at_least(2.0, 5.0),
    ],
    0.0,
);

pub const ECONOMY_BONUS: TierTable = TierTable::new(
    &[
        Tier::below(5.0, 12.0),
        Tier::at_most(6.0, 8.0),
        Tier::at_most(7.0, 5.0),
        Tier::at_most(8.0, 2.0),
        Tier::at_most(9.0, 0.0),
        Tier::at_most(10.0, -4.0),
        Tier::at_most(11.0, -8.0),
    ],
    -12.0,
);

/// Bowling points, rounded to one decimal place.
pub fn bowling_points(stats: &BowlingStats) -> f64 {
    let wickets = f64::from(stats.wickets);

    let mut points = wickets * WICKET_POINTS;
    points += f64::from(stats.dot_balls) * DOT_BALL_POINTS;
    points += f64::from(stats.maidens) * MAIDEN_POINTS;
    points += WICKET_MILESTONE_BONUS.points_for(wickets);

    if stats.overs_bowled >= ECONOMY_MIN_OVERS {
        if let Some(economy) = stats.economy() {
            points += ECONOMY_BONUS.points_for(economy);
        }
    }

    round_to_tenth(points)
}

pub struct BowlingCalculator;

impl PointsCalculator for BowlingCalculator {
    fn calculate(&self, stats: &PerformanceStats) -> f64 {
        bowling_points(&stats.bowling)
    }

    fn name(&self) -> &'static str {
        "bowling"
    }
}
