//! Season badges: five completions in a season bucket
//!
//! Completions are bucketed by UTC month into the four seasons across all
//! years; the badge id's season-year comes from the evaluation instant via
//! `calendar::season_year` (see DESIGN.md for the inherited winter quirk).

use async_trait::async_trait;
use chrono::Datelike;
use std::collections::HashMap;

use crate::calendar::{season_year, Season};
use crate::catalog::badges::SEASON_BADGE_MIN_COMPLETIONS;
use crate::engine::evaluator::{Candidate, EvalContext, Evaluator};
use crate::store::StoreError;

pub struct SeasonBadges;

#[async_trait]
impl Evaluator for SeasonBadges {
    fn name(&self) -> &'static str {
        "seasons"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        let history = ctx.facts.list_completions(ctx.user).await?;

        let mut buckets: HashMap<Season, usize> = HashMap::new();
        for completion in &history {
            let season = Season::from_month(completion.completed_at.month());
            *buckets.entry(season).or_default() += 1;
        }

        let mut candidates = Vec::new();
        for season in Season::all() {
            if buckets.get(&season).copied().unwrap_or(0) >= SEASON_BADGE_MIN_COMPLETIONS {
                let year = season_year(season, ctx.now);
                candidates.push(Candidate::badge(format!(
                    "season_{}_{}",
                    season.as_str(),
                    year
                )));
            }
        }
        Ok(candidates)
    }
}
