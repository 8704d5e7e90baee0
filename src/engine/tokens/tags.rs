//! Tag-propagated tokens: a trail can carry token ids in its own tag list
//!
//! Tags are free-form, so they are batch-checked against the token catalog
//! first; only tags that name a real token become candidates.

use async_trait::async_trait;

use crate::engine::evaluator::{Candidate, EvalContext, Evaluator};
use crate::store::StoreError;

pub struct TrailTagTokens;

#[async_trait]
impl Evaluator for TrailTagTokens {
    fn name(&self) -> &'static str {
        "trail_tags"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        let Some(trail) = ctx.facts.trail_attributes(ctx.trail_id).await? else {
            return Ok(vec![]);
        };
        if trail.tags.is_empty() {
            return Ok(vec![]);
        }

        let known = ctx.facts.token_catalog(&trail.tags).await?;
        Ok(known
            .into_iter()
            .map(|token| Candidate::Token(token.id))
            .collect())
    }
}
