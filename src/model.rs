//! Domain records for the achievement engine
//!
//! These structures represent completions and their detail payload, trail
//! attributes consumed from the ingestion pipeline, and the award records the
//! engine returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Execution mode for an evaluation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Persist newly-qualifying awards and return only those.
    Reward,
    /// Report everything that currently qualifies without persisting.
    Detect,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reward => "reward",
            Self::Detect => "detect",
        }
    }
}

/// A user's record of finishing a specific trail once
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    pub trail_id: String,
    pub completed_at: DateTime<Utc>,
    pub duration_seconds: u32,
    pub details: CompletionDetails,
}

/// Read-only trail attributes, precomputed by the ingestion pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailAttributes {
    /// Two-letter state abbreviation, e.g. "pa"
    pub state: String,
    pub county: String,
    pub park_name: Option<String>,
    pub distance_m: f64,
    pub elevation_gain_m: f64,
    pub avg_angle: f64,
    pub max_angle: f64,
    pub tags: Vec<String>,
}

/// Catalog entry for a badge. Static seed data, never created by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// Catalog entry for a token. Static seed data, never created by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// Result of one evaluation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rewards {
    pub badges: Vec<Badge>,
    pub tokens: Vec<Token>,
}

impl Rewards {
    pub fn is_empty(&self) -> bool {
        self.badges.is_empty() && self.tokens.is_empty()
    }
}

// ============================================================================
// Completion detail payload
// ============================================================================

/// Self-reported details attached to a completion.
///
/// Every category is a closed set; absent selections yield no candidates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionDetails {
    pub weight: Vec<WeightCarry>,
    pub movement: Vec<MovementConstraint>,
    pub trail_adjacent: bool,
    pub surface_rule: Option<SurfaceRule>,
    pub perception: Vec<PerceptionWindow>,
    pub environment: Vec<EnvironmentCondition>,
    /// Free-form species notes; any entry counts as an observation.
    pub wildlife: Vec<String>,
    pub circus: Vec<CircusStunt>,
    pub sports: Vec<Sport>,
    /// Actual moving time as reported by the user.
    pub duration_minutes: Option<u32>,
    /// Pre-hike time estimate shown to the user, if one was displayed.
    pub estimated_minutes: Option<u32>,
}

/// A weight-carrying style with the load in pounds.
///
/// A style selected without a load defaults to 1 lb (class 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightCarry {
    pub style: WeightStyle,
    pub pounds: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightStyle {
    Pack,
    Front,
    Overhead,
    Vest,
    Uneven,
    Awkward,
}

impl WeightStyle {
    /// Base token id, unqualified for load class 1.
    pub fn base_token(&self) -> &'static str {
        match self {
            Self::Pack => "pack_hauler",
            Self::Front => "front_loader",
            Self::Overhead => "overhead_operator",
            Self::Vest => "vest_bound",
            Self::Uneven => "balance_tested",
            Self::Awkward => "awkward_advantage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementConstraint {
    OneFooted,
    LowCrawl,
    Backwards,
    Hopping,
    DuckWalk,
    SillyWalk,
}

impl MovementConstraint {
    pub fn token_id(&self) -> &'static str {
        match self {
            Self::OneFooted => "one_footed",
            Self::LowCrawl => "low_crawl",
            Self::Backwards => "backwards",
            Self::Hopping => "hopping",
            Self::DuckWalk => "duck_walk",
            Self::SillyWalk => "silly_walk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceRule {
    RockOnly,
    WoodOnly,
    NoBareGround,
}

impl SurfaceRule {
    pub fn token_id(&self) -> &'static str {
        match self {
            Self::RockOnly => "rock_only",
            Self::WoodOnly => "wood_only",
            Self::NoBareGround => "no_bare_ground",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerceptionWindow {
    Dawn,
    Dusk,
    Night,
    AfterMidnight,
}

impl PerceptionWindow {
    pub fn token_id(&self) -> &'static str {
        match self {
            Self::Dawn => "early_riser",
            Self::Dusk => "dusk_walker",
            Self::Night => "night_hiker",
            Self::AfterMidnight => "after_midnight",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentCondition {
    RainedWholeTime,
    SnowedWholeTime,
    SnowOnTrail,
    HighWind,
    ExtremeHeat,
    ExtremeCold,
}

impl EnvironmentCondition {
    pub fn token_id(&self) -> &'static str {
        match self {
            Self::RainedWholeTime => "rain_soaked",
            Self::SnowedWholeTime => "snowbound",
            Self::SnowOnTrail => "snow_tracker",
            Self::HighWind => "wind_runner",
            Self::ExtremeHeat => "heat_hardened",
            Self::ExtremeCold => "cold_blooded",
        }
    }
}

/// A circus stunt performed along the trail, with its performance inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stunt", rename_all = "snake_case")]
pub enum CircusStunt {
    Juggling {
        #[serde(default = "default_balls")]
        balls: u32,
        #[serde(default)]
        drops: u32,
    },
    Unicycling {
        #[serde(default)]
        falls: u32,
    },
    StiltWalking,
    HandstandWalk {
        #[serde(default)]
        fifty_meters: bool,
    },
    PoiSpinning,
    StaffSpinning,
    HulaHooping,
    Slacklining,
}

fn default_balls() -> u32 {
    3
}

impl CircusStunt {
    /// Untiered token id for stunts that award directly.
    pub fn base_token(&self) -> &'static str {
        match self {
            Self::Juggling { .. } => "juggling",
            Self::Unicycling { .. } => "unicycling",
            Self::StiltWalking => "stilts",
            Self::HandstandWalk { .. } => "handstand",
            Self::PoiSpinning => "poi_spinning",
            Self::StaffSpinning => "staff_spinning",
            Self::HulaHooping => "hula_hooping",
            Self::Slacklining => "slacklining",
        }
    }
}

/// A sport skill performed along the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "sport", rename_all = "snake_case")]
pub enum Sport {
    SoccerDribble,
    BasketballDribble,
    HockeyControl,
    LacrosseCradle,
    PaddleBallBounce,
    BaseballGloveCarry,
    DiscGolf {
        #[serde(default)]
        throws: u32,
    },
}

impl Sport {
    /// Token id for single-tier sports. Disc golf tiers separately.
    pub fn token_id(&self) -> Option<&'static str> {
        match self {
            Self::SoccerDribble => Some("soccer_dribble"),
            Self::BasketballDribble => Some("basketball_dribble"),
            Self::HockeyControl => Some("hockey_control"),
            Self::LacrosseCradle => Some("lacrosse_cradle"),
            Self::PaddleBallBounce => Some("paddle_ball_bounce"),
            Self::BaseballGloveCarry => Some("baseball_glove_carry"),
            Self::DiscGolf { .. } => None,
        }
    }
}

// ============================================================================
// Quests
// ============================================================================

/// A long-running challenge with ordered level milestones
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub max_level: u32,
}

/// One tier of a quest: reaching `distance_m` cumulative meters grants `level`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestLevel {
    pub quest_id: String,
    pub level: u32,
    pub distance_m: f64,
}

/// A user's current standing in a quest. Mutated, never replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserQuest {
    pub user_id: String,
    pub quest_id: String,
    pub current_level: u32,
    /// Accumulated progress, `{"distance": meters}` as stored.
    pub progress_distance_m: f64,
    pub earned_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_payload_roundtrip_defaults() {
        // A bare payload deserializes with every category empty
        let details: CompletionDetails = serde_json::from_str("{}").unwrap();
        assert!(details.weight.is_empty());
        assert!(details.surface_rule.is_none());
        assert!(!details.trail_adjacent);

        // Juggling defaults: 3 balls, 0 drops
        let stunt: CircusStunt = serde_json::from_str(r#"{"stunt":"juggling"}"#).unwrap();
        assert_eq!(
            stunt,
            CircusStunt::Juggling {
                balls: 3,
                drops: 0
            }
        );
    }

    #[test]
    fn categorical_token_ids() {
        assert_eq!(MovementConstraint::DuckWalk.token_id(), "duck_walk");
        assert_eq!(PerceptionWindow::Dawn.token_id(), "early_riser");
        assert_eq!(EnvironmentCondition::ExtremeCold.token_id(), "cold_blooded");
        assert_eq!(WeightStyle::Uneven.base_token(), "balance_tested");
        assert_eq!(Sport::DiscGolf { throws: 12 }.token_id(), None);
    }
}
