use super::super::{FieldingStats, PerformanceStats, PointsCalculator};

const CATCH_POINTS: u32 = 5;
const RUNOUT_ASSIST_POINTS: u32 = 6;
const RUNOUT_POINTS: u32 = 8;
const STUMPING_POINTS: u32 = 7;

/// Fielding points. Always a whole number.
pub fn fielding_points(stats: &FieldingStats) -> f64 {
    let points = u64::from(stats.catches) * u64::from(CATCH_POINTS)
        + u64::from(stats.runout_assists) * u64::from(RUNOUT_ASSIST_POINTS)
        + u64::from(stats.runouts) * u64::from(RUNOUT_POINTS)
        + u64::from(stats.stumpings) * u64::from(STUMPING_POINTS);

    points as f64
}

pub struct FieldingCalculator;

impl PointsCalculator for FieldingCalculator {
    fn calculate(&self, stats: &PerformanceStats) -> f64 {
        fielding_points(&stats.fielding)
    }

    fn name(&self) -> &'static str {
        "fielding"
    }
}
