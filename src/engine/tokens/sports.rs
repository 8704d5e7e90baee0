//! Sport tokens: direct awards plus par-tiered disc golf
//!
//! Disc golf expects one throw per 30 ft of trail; finishing three or more
//! under par rates the top tier, one over par or worse falls through the
//! ladder to tier 1.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::catalog::tokens::DISC_GOLF_FT_PER_THROW;
use crate::engine::evaluator::{Candidate, EvalContext, Evaluator};
use crate::model::Sport;
use crate::par::meters_to_feet;
use crate::store::StoreError;

/// Disc golf tier (1 = worst, 6 = best) for a throw count on a trail length.
pub fn disc_golf_tier(throws: u32, trail_distance_ft: f64) -> u8 {
    let par = (trail_distance_ft / DISC_GOLF_FT_PER_THROW).ceil() as i64;
    let throws = i64::from(throws);
    match throws - par {
        d if d <= -3 => 6,
        -2 => 5,
        -1 => 4,
        0 => 3,
        1 => 2,
        _ => 1,
    }
}

pub struct SportsTokens;

#[async_trait]
impl Evaluator for SportsTokens {
    fn name(&self) -> &'static str {
        "sports"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        if ctx.details.sports.is_empty() {
            return Ok(vec![]);
        }

        let mut ids = Vec::new();
        for sport in &ctx.details.sports {
            match sport {
                Sport::DiscGolf { throws } => {
                    let Some(trail) = ctx.facts.trail_attributes(ctx.trail_id).await? else {
                        tracing::warn!(trail = ctx.trail_id, "No trail attributes for disc golf par");
                        continue;
                    };
                    let tier = disc_golf_tier(*throws, meters_to_feet(trail.distance_m));
                    ids.push(format!("disc_golf_{tier}"));
                }
                other => {
                    if let Some(id) = other.token_id() {
                        ids.push(id.to_string());
                    }
                }
            }
        }

        let mut seen = HashSet::new();
        Ok(ids
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .map(Candidate::Token)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disc_golf_ladder() {
        // 300 ft -> par 10 throws
        let ft = 300.0;
        assert_eq!(disc_golf_tier(7, ft), 6);
        assert_eq!(disc_golf_tier(8, ft), 5);
        assert_eq!(disc_golf_tier(9, ft), 4);
        assert_eq!(disc_golf_tier(10, ft), 3);
        assert_eq!(disc_golf_tier(11, ft), 2);
        assert_eq!(disc_golf_tier(12, ft), 1);
        assert_eq!(disc_golf_tier(40, ft), 1);
    }

    #[test]
    fn par_rounds_up_from_distance() {
        // 301 ft -> par 11, so 11 throws is par
        assert_eq!(disc_golf_tier(11, 301.0), 3);
    }
}
