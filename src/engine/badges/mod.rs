//! Badge evaluators
//!
//! Milestone tables award only the highest tier met; streak and collection
//! tables award every tier met. The asymmetry is deliberate and load-bearing.

mod collection;
mod geographic;
mod holidays;
mod milestones;
mod seasons;
mod streaks;

pub use collection::StateCollectionBadges;
pub use geographic::{CountyBadges, NationalParkBadges, StateBadges, StateParkBadges};
pub use holidays::HolidayBadges;
pub use milestones::{
    FirstStepsBadge, TotalDistanceBadges, TotalElevationBadges, UniqueTrailBadges,
};
pub use seasons::SeasonBadges;
pub use streaks::StreakBadges;
