//! Categorical tokens: a detail selection maps straight to a token id
//!
//! No thresholds, no facts beyond the payload itself; absence of a selection
//! yields no candidate.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::engine::evaluator::{Candidate, EvalContext, Evaluator};
use crate::store::StoreError;

fn dedup_tokens(ids: impl IntoIterator<Item = String>) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    ids.into_iter()
        .filter(|id| seen.insert(id.clone()))
        .map(Candidate::Token)
        .collect()
}

/// One token per selected movement constraint
pub struct MovementTokens;

#[async_trait]
impl Evaluator for MovementTokens {
    fn name(&self) -> &'static str {
        "movement"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        Ok(dedup_tokens(
            ctx.details
                .movement
                .iter()
                .map(|m| m.token_id().to_string()),
        ))
    }
}

/// Trail-adjacent walking plus the chosen surface rule
pub struct SurfaceTokens;

#[async_trait]
impl Evaluator for SurfaceTokens {
    fn name(&self) -> &'static str {
        "surface"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        let mut ids = Vec::new();
        if ctx.details.trail_adjacent {
            ids.push("trail_adjacent".to_string());
        }
        if let Some(rule) = ctx.details.surface_rule {
            ids.push(rule.token_id().to_string());
        }
        Ok(dedup_tokens(ids))
    }
}

/// One token per perception window hiked in
pub struct PerceptionTokens;

#[async_trait]
impl Evaluator for PerceptionTokens {
    fn name(&self) -> &'static str {
        "perception"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        Ok(dedup_tokens(
            ctx.details
                .perception
                .iter()
                .map(|p| p.token_id().to_string()),
        ))
    }
}

/// One token per environment condition endured
pub struct EnvironmentTokens;

#[async_trait]
impl Evaluator for EnvironmentTokens {
    fn name(&self) -> &'static str {
        "environment"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        Ok(dedup_tokens(
            ctx.details
                .environment
                .iter()
                .map(|e| e.token_id().to_string()),
        ))
    }
}

/// Any wildlife note at all earns the single witness token
pub struct WildlifeTokens;

#[async_trait]
impl Evaluator for WildlifeTokens {
    fn name(&self) -> &'static str {
        "wildlife"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        if ctx.details.wildlife.is_empty() {
            return Ok(vec![]);
        }
        Ok(vec![Candidate::token("wildlife_witness")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_selections_collapse() {
        let candidates = dedup_tokens(vec![
            "duck_walk".to_string(),
            "hopping".to_string(),
            "duck_walk".to_string(),
        ]);
        assert_eq!(
            candidates,
            vec![
                Candidate::token("duck_walk"),
                Candidate::token("hopping"),
            ]
        );
    }
}
