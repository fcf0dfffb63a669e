//! Fantasy points for a single (player, match) performance.
//!
//! Batting, bowling and fielding are each scored and rounded to one decimal
//! place, then summed and rounded again. Everything here is pure and
//! synchronous.

pub mod calculators;
mod errors;
pub mod models;
pub mod tiers;

pub use calculators::{batting_points, bowling_points, fielding_points};
pub use errors::ScoringError;
pub use models::{BattingStats, BowlingStats, FantasyPoints, FieldingStats, PerformanceStats};

use calculators::{BattingCalculator, BowlingCalculator, FieldingCalculator};

pub trait PointsCalculator: Send + Sync {
    /// Points for this discipline, already rounded to one decimal place
    fn calculate(&self, stats: &PerformanceStats) -> f64;

    fn name(&self) -> &'static str;
}

const CALCULATORS: [&dyn PointsCalculator; 3] =
    [&BattingCalculator, &BowlingCalculator, &FieldingCalculator];

/// Rounds half away from zero at one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Total points for stats that are already known to be valid.
pub fn total_points(stats: &PerformanceStats) -> FantasyPoints {
    let sum: f64 = CALCULATORS
        .iter()
        .map(|calculator| calculator.calculate(stats))
        .sum();

    FantasyPoints::new(sum)
}

/// Validates the stats and scores them.
pub fn compute_points(stats: &PerformanceStats) -> Result<FantasyPoints, ScoringError> {
    stats.validate()?;
    Ok(total_points(stats))
}
