use super::super::{
    round_to_tenth,
    tiers::{Tier, TierTable},
    BattingStats, PerformanceStats, PointsCalculator,
};

const FOUR_BONUS: f64 = 1.0;
const SIX_BONUS: f64 = 2.0;
const DUCK_PENALTY: f64 = -4.0;
/// Strike rate is only judged once a batter has faced this many balls
const STRIKE_RATE_MIN_BALLS: u32 = 10;

pub const MILESTONE_BONUS: TierTable = TierTable::new(
    &[
        Tier::at_least(150.0, 30.0),
        Tier::at_least(100.0, 20.0),
        Tier::at_least(50.0, 12.0),
        Tier::at_least(30.0, 6.0),
    ],
    0.0,
);

pub const STRIKE_RATE_BONUS: TierTable = TierTable::new(
    &[
        Tier::at_least(180.0, 10.0),
        Tier::at_least(170.0, 9.0),
        Tier::at_least(160.0, 8.0),
        Tier::at_least(150.0, 7.0),
        Tier::at_least(140.0, 6.0),
        Tier::at_least(130.0, 4.0),
        Tier::at_least(120.0, 3.0),
        Tier::at_least(110.0, 2.0),
        Tier::at_least(100.0, 1.0),
        Tier::at_least(60.0, 0.5),
    ],
    -8.0,
);

/// Batting points, rounded to one decimal place.
pub fn batting_points(stats: &BattingStats) -> f64 {
    let runs = f64::from(stats.runs);

    let mut points = runs;
    points += f64::from(stats.fours) * FOUR_BONUS;
    points += f64::from(stats.sixes) * SIX_BONUS;
    points += MILESTONE_BONUS.points_for(runs);

    if stats.runs == 0 && stats.balls_faced > 0 {
        points += DUCK_PENALTY;
    }

    if stats.balls_faced >= STRIKE_RATE_MIN_BALLS {
        if let Some(strike_rate) = stats.strike_rate() {
            points += STRIKE_RATE_BONUS.points_for(strike_rate);
        }
    }

    round_to_tenth(points)
}

pub struct BattingCalculator;

impl PointsCalculator for BattingCalculator {
    fn calculate(&self, stats: &PerformanceStats) -> f64 {
        batting_points(&stats.batting)
    }

    fn name(&self) -> &'static str {
        "batting"
    }
}
