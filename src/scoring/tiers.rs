/// Comparison a tier applies to the measured value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    AtLeast(f64),
    AtMost(f64),
    Below(f64),
}

impl Bound {
    pub fn admits(self, value: f64) -> bool {
        match self {
            Bound::AtLeast(threshold) => value >= threshold,
            Bound::AtMost(threshold) => value <= threshold,
            Bound::Below(threshold) => value < threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub bound: Bound,
    pub points: f64,
}

impl Tier {
    pub const fn at_least(threshold: f64, points: f64) -> Self {
        Self {
            bound: Bound::AtLeast(threshold),
            points,
        }
    }

    pub const fn at_most(threshold: f64, points: f64) -> Self {
        Self {
            bound: Bound::AtMost(threshold),
            points,
        }
    }

    pub const fn below(threshold: f64, points: f64) -> Self {
        Self {
            bound: Bound::Below(threshold),
            points,
        }
    }
}

/// Ordered rule table: the first tier admitting the value wins, otherwise
/// the fallback applies. Tables never accumulate across tiers.
#[derive(Debug, Clone, Copy)]
pub struct TierTable {
    tiers: &'static [Tier],
    fallback: f64,
}

impl TierTable {
    pub const fn new(tiers: &'static [Tier], fallback: f64) -> Self {
        Self { tiers, fallback }
    }

    pub fn points_for(&self, value: f64) -> f64 {
        self.tiers
            .iter()
            .find(|tier| tier.bound.admits(value))
            .map(|tier| tier.points)
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCENDING: TierTable = TierTable::new(
        &[Tier::at_least(100.0, 3.0), Tier::at_least(50.0, 2.0)],
        0.0,
    );

    const ASCENDING: TierTable =
        TierTable::new(&[Tier::below(5.0, 10.0), Tier::at_most(6.0, 5.0)], -1.0);

    #[test]
    fn first_matching_tier_wins() {
        assert_eq!(DESCENDING.points_for(150.0), 3.0);
        assert_eq!(DESCENDING.points_for(100.0), 3.0);
        assert_eq!(DESCENDING.points_for(99.9), 2.0);
    }

    #[test]
    fn falls_back_when_nothing_matches() {
        assert_eq!(DESCENDING.points_for(10.0), 0.0);
        assert_eq!(ASCENDING.points_for(6.1), -1.0);
    }

    #[test]
    fn strict_and_inclusive_bounds_differ_at_threshold() {
        assert_eq!(ASCENDING.points_for(4.99), 10.0);
        assert_eq!(ASCENDING.points_for(5.0), 5.0);
        assert_eq!(ASCENDING.points_for(6.0), 5.0);
    }
}
