//! Badge tier tables and calendar predicates
//!
//! Thresholds are ordered ascending. Milestone tables resolve to the single
//! highest tier met; streak and collection tables award every tier met.

/// One rung of an ordered threshold table
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub threshold: f64,
    pub id: &'static str,
}

/// Highest tier whose threshold the value meets, scanning from the top.
pub fn highest_tier(tiers: &'static [Tier], value: f64) -> Option<&'static Tier> {
    tiers.iter().rev().find(|t| value >= t.threshold)
}

/// Cumulative distance milestones in meters
pub static TOTAL_DISTANCE_TIERS: &[Tier] = &[
    Tier { threshold: 1609.0, id: "total_distance_01_neighborhood" }, // 1 mile
    Tier { threshold: 4999.0, id: "total_distance_02_park_run" },     // 3.1 mi
    Tier { threshold: 9980.0, id: "total_distance_03_city_circuit" }, // 6.2 mi
    Tier { threshold: 21097.0, id: "total_distance_04_half_way" },    // 13.1 mi
    Tier { threshold: 42195.0, id: "total_distance_05_legend" },      // 26.2 mi
    Tier { threshold: 56327.0, id: "total_distance_06_channel_cross" }, // 35 mi
    Tier { threshold: 80467.0, id: "total_distance_07_island_length" }, // 50 mi
    Tier { threshold: 120701.0, id: "total_distance_08_metro_link" }, // 75 mi
    Tier { threshold: 160934.0, id: "total_distance_09_century" },    // 100 mi
    Tier { threshold: 241401.0, id: "total_distance_10_coastliner" }, // 150 mi
    Tier { threshold: 360887.0, id: "total_distance_11_grand_canyon" }, // 224 mi
    Tier { threshold: 531082.0, id: "total_distance_12_state_crosser" }, // 330 mi
    Tier { threshold: 788567.0, id: "total_distance_13_great_north" }, // 490 mi
    Tier { threshold: 1174820.0, id: "total_distance_14_highland" },  // 730 mi
    Tier { threshold: 1609340.0, id: "total_distance_15_lands_end" }, // 1000 mi
    Tier { threshold: 2414010.0, id: "total_distance_16_border_scout" }, // 1500 mi
    Tier { threshold: 3498110.0, id: "total_distance_17_oregon_trail" }, // 2170 mi
    Tier { threshold: 4988980.0, id: "total_distance_18_continental" }, // 3100 mi
    Tier { threshold: 7402960.0, id: "total_distance_19_great_wall" }, // 4600 mi
    Tier { threshold: 10943200.0, id: "total_distance_20_river_source" }, // 6800 mi
    Tier { threshold: 16093400.0, id: "total_distance_21_cloud_piercer" }, // 10000 mi
    Tier { threshold: 20017600.0, id: "total_distance_22_pole_to_pole" }, // 12430 mi
    Tier { threshold: 29772200.0, id: "total_distance_23_circumnavigator" }, // 18500 mi
    Tier { threshold: 40084000.0, id: "total_distance_24_world_tour" }, // 24901 mi
    Tier { threshold: 59545000.0, id: "total_distance_25_abyss_path" }, // 37000 mi
    Tier { threshold: 88513700.0, id: "total_distance_26_orbit" },    // 55000 mi
    Tier { threshold: 131968000.0, id: "total_distance_27_high_atmosphere" }, // 82000 mi
    Tier { threshold: 193120000.0, id: "total_distance_28_deep_space" }, // 120000 mi
    Tier { threshold: 289680000.0, id: "total_distance_29_satellite" }, // 180000 mi
    Tier { threshold: 384400000.0, id: "total_distance_30_lunar_landing" }, // 238855 mi
];

/// Cumulative elevation-gain milestones in meters
pub static TOTAL_ELEVATION_TIERS: &[Tier] = &[
    Tier { threshold: 25.0, id: "total_elevation_25" },
    Tier { threshold: 50.0, id: "total_elevation_50" },
    Tier { threshold: 64.0, id: "total_elevation_64" },
    Tier { threshold: 96.0, id: "total_elevation_96" },
    Tier { threshold: 133.0, id: "total_elevation_133" },
    Tier { threshold: 319.0, id: "total_elevation_319" },
    Tier { threshold: 452.0, id: "total_elevation_452" },
    Tier { threshold: 509.0, id: "total_elevation_509" },
    Tier { threshold: 828.0, id: "total_elevation_828" },
    Tier { threshold: 1776.0, id: "total_elevation_1776" },
    Tier { threshold: 3776.0, id: "total_elevation_3776" },
    Tier { threshold: 4478.0, id: "total_elevation_4478" },
    Tier { threshold: 5895.0, id: "total_elevation_5895" },
    Tier { threshold: 6190.0, id: "total_elevation_6190" },
    Tier { threshold: 8848.0, id: "total_elevation_8848" },
    Tier { threshold: 17700.0, id: "total_elevation_17700" },
    Tier { threshold: 35000.0, id: "total_elevation_35000" },
    Tier { threshold: 70700.0, id: "total_elevation_70700" },
    Tier { threshold: 100000.0, id: "total_elevation_100000" },
    Tier { threshold: 200000.0, id: "total_elevation_200000" },
    Tier { threshold: 500000.0, id: "total_elevation_500000" },
    Tier { threshold: 1000000.0, id: "total_elevation_1000000" },
    Tier { threshold: 2000000.0, id: "total_elevation_2000000" },
    Tier { threshold: 5000000.0, id: "total_elevation_5000000" },
    Tier { threshold: 10000000.0, id: "total_elevation_10000000" },
    Tier { threshold: 20000000.0, id: "total_elevation_20000000" },
    Tier { threshold: 35786000.0, id: "total_elevation_35786000" },
    Tier { threshold: 96000000.0, id: "total_elevation_96000000" },
    Tier { threshold: 192000000.0, id: "total_elevation_192000000" },
    Tier { threshold: 288000000.0, id: "total_elevation_288000000" },
    Tier { threshold: 384400000.0, id: "total_elevation_384400000" },
];

/// Distinct-trail-count milestones
pub static UNIQUE_TRAIL_TIERS: &[Tier] = &[
    Tier { threshold: 3.0, id: "unique_trails_3" },
    Tier { threshold: 5.0, id: "unique_trails_5" },
    Tier { threshold: 10.0, id: "unique_trails_10" },
    Tier { threshold: 25.0, id: "unique_trails_25" },
    Tier { threshold: 50.0, id: "unique_trails_50" },
    Tier { threshold: 100.0, id: "unique_trails_100" },
    Tier { threshold: 250.0, id: "unique_trails_250" },
    Tier { threshold: 500.0, id: "unique_trails_500" },
    Tier { threshold: 1000.0, id: "unique_trails_1000" },
    Tier { threshold: 2500.0, id: "unique_trails_2500" },
    Tier { threshold: 5000.0, id: "unique_trails_5000" },
    Tier { threshold: 10000.0, id: "unique_trails_10000" },
];

/// Streak thresholds; every tier met is awarded, not just the highest.
pub static DAILY_STREAK_TIERS: &[u32] = &[
    3, 7, 14, 30, 60, 120, 240, 365, 730, 1095, 1460, 1825, 2555, 3650,
];
pub static WEEKLY_STREAK_TIERS: &[u32] = &[4, 8, 16, 32, 52, 104, 156, 208, 260, 364, 520];
pub static MONTHLY_STREAK_TIERS: &[u32] = &[3, 6, 12, 24, 36, 48, 60, 84, 120];

/// Distinct-state-badge collection tiers; award-all-passed, like streaks.
pub static STATE_COLLECTION_TIERS: &[Tier] = &[
    Tier { threshold: 3.0, id: "states_3" },
    Tier { threshold: 10.0, id: "states_10" },
    Tier { threshold: 25.0, id: "states_25" },
    Tier { threshold: 50.0, id: "states_50" },
];

/// Distinct trails required in a county before its badge unlocks
pub const COUNTY_BADGE_MIN_TRAILS: u64 = 3;
/// Distinct trails required in a national park before its badge unlocks
pub const NATIONAL_PARK_MIN_TRAILS: u64 = 3;
/// Distinct trails required in a state park before its badge unlocks
pub const STATE_PARK_MIN_TRAILS: u64 = 2;
/// County badges required in a state before the state badge unlocks
pub const STATE_BADGE_MIN_COUNTIES: u64 = 5;
/// Completions required in a season bucket before its badge unlocks
pub const SEASON_BADGE_MIN_COMPLETIONS: usize = 5;

/// County-badge requirement per state; Delaware has only three counties.
pub fn state_badge_required_counties(state: &str) -> u64 {
    if state.eq_ignore_ascii_case("de") {
        3
    } else {
        STATE_BADGE_MIN_COUNTIES
    }
}

/// A fixed-date holiday matched against UTC month/day
#[derive(Debug, Clone, Copy)]
pub struct Holiday {
    pub id: &'static str,
    pub month: u32,
    pub first_day: u32,
    pub last_day: u32,
}

impl Holiday {
    pub fn matches(&self, month: u32, day: u32) -> bool {
        month == self.month && day >= self.first_day && day <= self.last_day
    }
}

/// Holiday calendar; New Year keeps a 7-day window.
pub static HOLIDAYS: &[Holiday] = &[
    Holiday { id: "new_year", month: 1, first_day: 1, last_day: 7 },
    Holiday { id: "groundhog", month: 2, first_day: 2, last_day: 2 },
    Holiday { id: "valentines", month: 2, first_day: 14, last_day: 14 },
    Holiday { id: "pi", month: 3, first_day: 14, last_day: 14 },
    Holiday { id: "st_paddys", month: 3, first_day: 17, last_day: 17 },
    Holiday { id: "fourth_of_july", month: 7, first_day: 4, last_day: 4 },
    Holiday { id: "halloween", month: 10, first_day: 31, last_day: 31 },
    Holiday { id: "veterans", month: 11, first_day: 11, last_day: 11 },
    Holiday { id: "christmas", month: 12, first_day: 25, last_day: 25 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_tier_picks_single_rung() {
        // Crossing one threshold yields exactly that tier
        let tier = highest_tier(UNIQUE_TRAIL_TIERS, 7.0).unwrap();
        assert_eq!(tier.id, "unique_trails_5");
        // Exact threshold counts
        let tier = highest_tier(UNIQUE_TRAIL_TIERS, 10.0).unwrap();
        assert_eq!(tier.id, "unique_trails_10");
        // Below the first rung, nothing
        assert!(highest_tier(UNIQUE_TRAIL_TIERS, 2.0).is_none());
    }

    #[test]
    fn tier_tables_are_ascending() {
        for table in [
            TOTAL_DISTANCE_TIERS,
            TOTAL_ELEVATION_TIERS,
            UNIQUE_TRAIL_TIERS,
            STATE_COLLECTION_TIERS,
        ] {
            for pair in table.windows(2) {
                assert!(pair[0].threshold < pair[1].threshold, "{}", pair[1].id);
            }
        }
    }

    #[test]
    fn new_year_window_spans_first_week() {
        let new_year = &HOLIDAYS[0];
        assert!(new_year.matches(1, 1));
        assert!(new_year.matches(1, 7));
        assert!(!new_year.matches(1, 8));
        assert!(!new_year.matches(2, 1));
    }

    #[test]
    fn delaware_needs_fewer_counties() {
        assert_eq!(state_badge_required_counties("de"), 3);
        assert_eq!(state_badge_required_counties("DE"), 3);
        assert_eq!(state_badge_required_counties("pa"), 5);
    }
}
