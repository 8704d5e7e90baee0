//! Circus stunt tokens: par-tiered juggling and unicycling, direct awards
//! for the rest
//!
//! Juggling and unicycling compare the reported infraction count against a
//! par derived from trail length and average angle; the best tier also
//! grants a standalone master token. Juggling leaves its worst rung
//! unbounded, so any drop count above par still rates tier 2; unicycling
//! caps that rung at twice par and rates tier 1 beyond it.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::catalog::tokens::{par_tier, JUGGLING_DIVISOR_FT, PAR_TIER_COUNT, UNICYCLE_DIVISOR_FT};
use crate::engine::evaluator::{Candidate, EvalContext, Evaluator};
use crate::model::{CircusStunt, TrailAttributes};
use crate::par::stunt_par;
use crate::store::StoreError;

/// Token ids for one stunt entry given the trail it was performed on.
pub fn stunt_token_ids(stunt: &CircusStunt, trail: &TrailAttributes) -> Vec<String> {
    match *stunt {
        CircusStunt::Juggling { balls, drops } => {
            let par = stunt_par(trail.distance_m, trail.avg_angle, JUGGLING_DIVISOR_FT);
            let tier = par_tier(f64::from(drops), par, f64::INFINITY);
            let mut ids = vec![format!("juggling_{balls}_{tier}")];
            if tier == PAR_TIER_COUNT {
                ids.push("juggling_master".to_string());
            }
            ids
        }
        CircusStunt::Unicycling { falls } => {
            let par = stunt_par(trail.distance_m, trail.avg_angle, UNICYCLE_DIVISOR_FT);
            let tier = par_tier(f64::from(falls), par, par * 2.0);
            let mut ids = vec![format!("unicycle_{tier}")];
            if tier == PAR_TIER_COUNT {
                ids.push("unicycle_master".to_string());
            }
            ids
        }
        CircusStunt::HandstandWalk { fifty_meters } => {
            if fifty_meters {
                vec![stunt.base_token().to_string()]
            } else {
                vec![]
            }
        }
        _ => vec![stunt.base_token().to_string()],
    }
}

pub struct CircusTokens;

#[async_trait]
impl Evaluator for CircusTokens {
    fn name(&self) -> &'static str {
        "circus"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        if ctx.details.circus.is_empty() {
            return Ok(vec![]);
        }
        let Some(trail) = ctx.facts.trail_attributes(ctx.trail_id).await? else {
            tracing::warn!(trail = ctx.trail_id, "No trail attributes for circus par");
            return Ok(vec![]);
        };

        let mut seen = HashSet::new();
        Ok(ctx
            .details
            .circus
            .iter()
            .flat_map(|stunt| stunt_token_ids(stunt, &trail))
            .filter(|id| seen.insert(id.clone()))
            .map(Candidate::Token)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail(distance_m: f64, avg_angle: f64) -> TrailAttributes {
        TrailAttributes {
            state: "pa".to_string(),
            county: "Westmoreland".to_string(),
            park_name: None,
            distance_m,
            elevation_gain_m: 0.0,
            avg_angle,
            max_angle: avg_angle,
            tags: vec![],
        }
    }

    #[test]
    fn juggling_at_par_rates_tier_three() {
        // 457.2 m flat = 1500 ft -> par 10 drops at 150 ft/drop
        let t = trail(457.2, 0.0);
        let ids = stunt_token_ids(&CircusStunt::Juggling { balls: 3, drops: 10 }, &t);
        assert_eq!(ids, vec!["juggling_3_3".to_string()]);
    }

    #[test]
    fn flawless_juggling_grants_master() {
        let t = trail(457.2, 0.0);
        let ids = stunt_token_ids(&CircusStunt::Juggling { balls: 5, drops: 0 }, &t);
        assert_eq!(
            ids,
            vec!["juggling_5_8".to_string(), "juggling_master".to_string()]
        );
    }

    #[test]
    fn unicycling_past_double_par_bottoms_out() {
        // 304.8 m flat = 1000 ft -> par 10 falls at 100 ft/fall
        let t = trail(304.8, 0.0);
        let ids = stunt_token_ids(&CircusStunt::Unicycling { falls: 25 }, &t);
        assert_eq!(ids, vec!["unicycle_1".to_string()]);

        let ids = stunt_token_ids(&CircusStunt::Unicycling { falls: 0 }, &t);
        assert_eq!(
            ids,
            vec!["unicycle_8".to_string(), "unicycle_master".to_string()]
        );
    }

    #[test]
    fn handstand_requires_the_distance_flag() {
        let t = trail(1000.0, 0.0);
        assert!(stunt_token_ids(&CircusStunt::HandstandWalk { fifty_meters: false }, &t).is_empty());
        assert_eq!(
            stunt_token_ids(&CircusStunt::HandstandWalk { fifty_meters: true }, &t),
            vec!["handstand".to_string()]
        );
    }

    #[test]
    fn untiered_stunts_map_directly() {
        let t = trail(1000.0, 0.0);
        assert_eq!(
            stunt_token_ids(&CircusStunt::Slacklining, &t),
            vec!["slacklining".to_string()]
        );
        assert_eq!(
            stunt_token_ids(&CircusStunt::PoiSpinning, &t),
            vec!["poi_spinning".to_string()]
        );
    }
}
