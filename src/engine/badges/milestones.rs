//! Milestone badges: first completion and cumulative totals
//!
//! Each rule recomputes its running total across the whole history and
//! candidates the single highest catalog tier the total meets.

use async_trait::async_trait;

use crate::catalog::badges::{
    highest_tier, TOTAL_DISTANCE_TIERS, TOTAL_ELEVATION_TIERS, UNIQUE_TRAIL_TIERS,
};
use crate::engine::evaluator::{Candidate, EvalContext, Evaluator};
use crate::store::StoreError;

/// First ever completion
pub struct FirstStepsBadge;

#[async_trait]
impl Evaluator for FirstStepsBadge {
    fn name(&self) -> &'static str {
        "first_steps"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        let total = ctx.facts.count_completions(ctx.user).await?;
        // Fires only on the very first completion; the guard absorbs reruns.
        if total == 1 {
            return Ok(vec![Candidate::badge("first_steps")]);
        }
        Ok(vec![])
    }
}

/// Distinct-trail-count milestones
pub struct UniqueTrailBadges;

#[async_trait]
impl Evaluator for UniqueTrailBadges {
    fn name(&self) -> &'static str {
        "unique_trails"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        let unique = ctx.facts.count_distinct_trails(ctx.user, None).await?;
        Ok(highest_tier(UNIQUE_TRAIL_TIERS, unique as f64)
            .map(|t| vec![Candidate::badge(t.id)])
            .unwrap_or_default())
    }
}

/// Cumulative distance milestones, repeats included
pub struct TotalDistanceBadges;

#[async_trait]
impl Evaluator for TotalDistanceBadges {
    fn name(&self) -> &'static str {
        "total_distance"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        let total = ctx.facts.total_distance_m(ctx.user).await?;
        Ok(highest_tier(TOTAL_DISTANCE_TIERS, total)
            .map(|t| vec![Candidate::badge(t.id)])
            .unwrap_or_default())
    }
}

/// Cumulative elevation-gain milestones
pub struct TotalElevationBadges;

#[async_trait]
impl Evaluator for TotalElevationBadges {
    fn name(&self) -> &'static str {
        "total_elevation"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        let total = ctx.facts.total_elevation_gain_m(ctx.user).await?;
        Ok(highest_tier(TOTAL_ELEVATION_TIERS, total)
            .map(|t| vec![Candidate::badge(t.id)])
            .unwrap_or_default())
    }
}
