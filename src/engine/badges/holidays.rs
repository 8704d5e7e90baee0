//! Holiday badges: a completion on a holiday earns `holiday_<name>_<year>`
//!
//! The whole history is scanned, so a holiday hike from a past year still
//! surfaces its badge; several completions on the same holiday collapse into
//! one candidate.

use async_trait::async_trait;
use chrono::Datelike;
use std::collections::HashSet;

use crate::catalog::badges::HOLIDAYS;
use crate::engine::evaluator::{Candidate, EvalContext, Evaluator};
use crate::store::StoreError;

pub struct HolidayBadges;

#[async_trait]
impl Evaluator for HolidayBadges {
    fn name(&self) -> &'static str {
        "holidays"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        let history = ctx.facts.list_completions(ctx.user).await?;

        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for completion in &history {
            let at = completion.completed_at;
            for holiday in HOLIDAYS {
                if !holiday.matches(at.month(), at.day()) {
                    continue;
                }
                let id = format!("holiday_{}_{}", holiday.id, at.year());
                if seen.insert(id.clone()) {
                    candidates.push(Candidate::Badge(id));
                }
            }
        }
        Ok(candidates)
    }
}
