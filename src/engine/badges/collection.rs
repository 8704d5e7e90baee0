//! State-collection meta-badges: distinct state badges already held
//!
//! Reads prior awards rather than raw completions, and awards every tier the
//! collection count meets (same behavior as streaks).

use async_trait::async_trait;

use crate::catalog::badges::STATE_COLLECTION_TIERS;
use crate::engine::evaluator::{Candidate, EvalContext, Evaluator};
use crate::store::StoreError;

pub struct StateCollectionBadges;

#[async_trait]
impl Evaluator for StateCollectionBadges {
    fn name(&self) -> &'static str {
        "state_collection"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        let states = ctx.facts.list_badge_ids(ctx.user, Some("state_")).await?;
        let count = states.len() as f64;

        Ok(STATE_COLLECTION_TIERS
            .iter()
            .filter(|tier| count >= tier.threshold)
            .map(|tier| Candidate::badge(tier.id))
            .collect())
    }
}
