//! Token tier tables: load classes, par tiers, speed tiers, repeat counts

/// Weight classes over half-open pound intervals `(min, max]`
#[derive(Debug, Clone, Copy)]
struct LoadClass {
    min: f64,
    max: f64,
    class: u8,
}

static LOAD_CLASSES: &[LoadClass] = &[
    LoadClass { min: 0.0, max: 10.0, class: 1 },
    LoadClass { min: 10.0, max: 25.0, class: 2 },
    LoadClass { min: 25.0, max: 50.0, class: 3 },
    LoadClass { min: 50.0, max: 80.0, class: 4 },
    LoadClass { min: 80.0, max: 120.0, class: 5 },
    LoadClass { min: 120.0, max: f64::INFINITY, class: 6 },
];

/// Weight class for a load in pounds; out-of-range input falls back to 1.
pub fn load_class(pounds: f64) -> u8 {
    LOAD_CLASSES
        .iter()
        .find(|lc| pounds > lc.min && pounds <= lc.max)
        .map(|lc| lc.class)
        .unwrap_or(1)
}

/// Par fractions separating performance tiers, best to worst. A count of
/// strictly more infractions than a rung drops you below it.
static PAR_TIER_FRACTIONS: &[f64] = &[1.0, 0.85, 0.70, 0.55, 0.35, 0.15];

/// Number of par-based performance tiers; tier 8 is flawless-or-near.
pub const PAR_TIER_COUNT: u8 = 8;

/// Performance tier (1 = worst, 8 = best) for an infraction count against par.
///
/// `top_threshold` is the rung above par that still rates tier 2: unbounded
/// for juggling, twice par for unicycling.
pub fn par_tier(infractions: f64, par: f64, top_threshold: f64) -> u8 {
    let mut thresholds = Vec::with_capacity(PAR_TIER_COUNT as usize);
    thresholds.push(top_threshold);
    for fraction in PAR_TIER_FRACTIONS {
        thresholds.push(par * fraction);
    }
    thresholds.push(0.0);

    for (i, threshold) in thresholds.iter().enumerate() {
        if infractions > *threshold {
            return (i + 1) as u8;
        }
    }
    PAR_TIER_COUNT
}

/// Feet of trail per allowed juggling drop
pub const JUGGLING_DIVISOR_FT: f64 = 150.0;
/// Feet of trail per allowed unicycle fall
pub const UNICYCLE_DIVISOR_FT: f64 = 100.0;
/// Feet of trail per expected disc golf throw
pub const DISC_GOLF_FT_PER_THROW: f64 = 30.0;

/// One speed-token tier: earned when estimated/actual meets the multiplier
#[derive(Debug, Clone, Copy)]
pub struct SpeedTier {
    pub multiplier: f64,
    pub id: &'static str,
}

/// Ascending speed tiers; the highest multiplier met wins.
pub static SPEED_TIERS: &[SpeedTier] = &[
    SpeedTier { multiplier: 1.0, id: "swiftfoot_1" },
    SpeedTier { multiplier: 1.5, id: "swiftfoot_2" },
    SpeedTier { multiplier: 2.5, id: "swiftfoot_3" },
    SpeedTier { multiplier: 4.0, id: "swiftfoot_4" },
    SpeedTier { multiplier: 6.0, id: "swiftfoot_5" },
    SpeedTier { multiplier: 8.0, id: "swiftfoot_6" },
];

/// Exact repeat-completion counts and the token each fires.
/// Only these counts trigger; "at least" does not apply here.
pub static REPEAT_TIERS: &[(u64, &str)] = &[
    (2, "path_replay"),
    (5, "high_five"),
    (10, "trail_veteran"),
    (25, "seasoned_pathwalker"),
    (50, "keeper_of_the_way"),
    (100, "legendary_wanderer"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_class_intervals_are_half_open() {
        assert_eq!(load_class(1.0), 1);
        assert_eq!(load_class(10.0), 1); // (0, 10] includes 10
        assert_eq!(load_class(10.1), 2);
        assert_eq!(load_class(25.0), 2);
        assert_eq!(load_class(80.0), 4);
        assert_eq!(load_class(120.5), 6);
        assert_eq!(load_class(1000.0), 6);
    }

    #[test]
    fn par_tier_boundaries() {
        let par = 10.0;
        // Exactly par: above the 85% rung, below par itself -> tier 3
        assert_eq!(par_tier(10.0, par, f64::INFINITY), 3);
        // Zero infractions: flawless
        assert_eq!(par_tier(0.0, par, f64::INFINITY), 8);
        // One more than par still rates tier 2 when the top is unbounded
        assert_eq!(par_tier(11.0, par, f64::INFINITY), 2);
        // With a 2x-par ceiling, blowing past it rates tier 1
        assert_eq!(par_tier(25.0, par, par * 2.0), 1);
        assert_eq!(par_tier(15.0, par, par * 2.0), 2);
        // Just inside the 15% rung -> tier 7
        assert_eq!(par_tier(1.0, par, f64::INFINITY), 7);
    }

    #[test]
    fn speed_tiers_ascend() {
        for pair in SPEED_TIERS.windows(2) {
            assert!(pair[0].multiplier < pair[1].multiplier);
        }
    }
}
