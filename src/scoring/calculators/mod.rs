mod batting;
mod bowling;
mod fielding;

pub use batting::{batting_points, BattingCalculator, MILESTONE_BONUS, STRIKE_RATE_BONUS};
pub use bowling::{bowling_points, BowlingCalculator, ECONOMY_BONUS, WICKET_MILESTONE_BONUS};
pub use fielding::{fielding_points, FieldingCalculator};
