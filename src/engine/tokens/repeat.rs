//! Repeat-completion tokens: fire only on exact landmark counts
//!
//! The count includes the triggering completion, which the completion flow
//! has already written by the time the engine runs.

use async_trait::async_trait;

use crate::catalog::tokens::REPEAT_TIERS;
use crate::engine::evaluator::{Candidate, EvalContext, Evaluator};
use crate::store::StoreError;

pub struct RepeatTokens;

#[async_trait]
impl Evaluator for RepeatTokens {
    fn name(&self) -> &'static str {
        "repeat"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        let times = ctx
            .facts
            .completions_of_trail(ctx.user, ctx.trail_id)
            .await?;

        // Exact counts only; 11 completions of a trail earn nothing new
        Ok(REPEAT_TIERS
            .iter()
            .find(|(count, _)| *count == times)
            .map(|(_, id)| vec![Candidate::token(*id)])
            .unwrap_or_default())
    }
}
