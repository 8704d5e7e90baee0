//! Rule catalog: static tables mapping trigger conditions to award ids
//!
//! Pure data, loaded into the binary at compile time. Tier tables are ordered
//! ascending; resolution semantics (highest-only vs. all-passed) live with
//! the evaluators that read them.

pub mod badges;
pub mod tokens;

pub use badges::{
    Holiday, Tier, COUNTY_BADGE_MIN_TRAILS, DAILY_STREAK_TIERS, HOLIDAYS, MONTHLY_STREAK_TIERS,
    NATIONAL_PARK_MIN_TRAILS, SEASON_BADGE_MIN_COMPLETIONS, STATE_BADGE_MIN_COUNTIES,
    STATE_COLLECTION_TIERS, STATE_PARK_MIN_TRAILS, TOTAL_DISTANCE_TIERS, TOTAL_ELEVATION_TIERS,
    UNIQUE_TRAIL_TIERS, WEEKLY_STREAK_TIERS,
};
pub use tokens::{
    load_class, par_tier, SpeedTier, DISC_GOLF_FT_PER_THROW, JUGGLING_DIVISOR_FT, REPEAT_TIERS,
    SPEED_TIERS, UNICYCLE_DIVISOR_FT,
};
