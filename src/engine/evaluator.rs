//! Evaluator seam and the fixed evaluator registry
//!
//! Each unlock rule family is one value implementing [`Evaluator`]. The set
//! is closed and assembled once; there is no runtime discovery or mutation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use super::badges::{
    CountyBadges, FirstStepsBadge, HolidayBadges, NationalParkBadges, SeasonBadges,
    StateBadges, StateCollectionBadges, StateParkBadges, StreakBadges, TotalDistanceBadges,
    TotalElevationBadges, UniqueTrailBadges,
};
use super::facts::Facts;
use super::tokens::{
    CircusTokens, EnvironmentTokens, MovementTokens, PerceptionTokens, RepeatTokens, SpeedTokens,
    SportsTokens, SurfaceTokens, TrailTagTokens, WeightTokens, WildlifeTokens,
};
use crate::model::{CompletionDetails, Mode};
use crate::store::StoreError;

/// An award an evaluator proposes before idempotency filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Badge(String),
    Token(String),
}

impl Candidate {
    pub fn badge(id: impl Into<String>) -> Self {
        Self::Badge(id.into())
    }

    pub fn token(id: impl Into<String>) -> Self {
        Self::Token(id.into())
    }
}

/// Request-scoped inputs shared by the whole evaluator set
pub struct EvalContext<'a> {
    pub user: &'a str,
    pub trail_id: &'a str,
    pub details: &'a CompletionDetails,
    pub mode: Mode,
    /// Evaluation instant, injected so calendar-sensitive rules are testable.
    pub now: DateTime<Utc>,
    pub facts: Facts<'a>,
}

/// One independent unlock rule family.
///
/// Evaluators read facts and propose candidates; they never write. A failed
/// fact query surfaces as an error the orchestrator logs and isolates — it
/// must not take sibling evaluators down with it.
#[async_trait]
pub trait Evaluator: Send + Sync {
    fn name(&self) -> &'static str;

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError>;
}

/// The default orchestrated set. The quest evaluator is kept out of this
/// list and runs through [`crate::RewardEngine::evaluate_quest`] instead.
pub static EVALUATOR_SET: Lazy<Vec<Box<dyn Evaluator>>> = Lazy::new(|| {
    vec![
        // Badge evaluators
        Box::new(FirstStepsBadge),
        Box::new(UniqueTrailBadges),
        Box::new(TotalDistanceBadges),
        Box::new(TotalElevationBadges),
        Box::new(CountyBadges),
        Box::new(StateBadges),
        Box::new(NationalParkBadges),
        Box::new(StateParkBadges),
        Box::new(SeasonBadges),
        Box::new(HolidayBadges),
        Box::new(StreakBadges),
        Box::new(StateCollectionBadges),
        // Token evaluators
        Box::new(RepeatTokens),
        Box::new(TrailTagTokens),
        Box::new(WeightTokens),
        Box::new(MovementTokens),
        Box::new(SurfaceTokens),
        Box::new(PerceptionTokens),
        Box::new(EnvironmentTokens),
        Box::new(WildlifeTokens),
        Box::new(CircusTokens),
        Box::new(SportsTokens),
        Box::new(SpeedTokens),
    ]
});
