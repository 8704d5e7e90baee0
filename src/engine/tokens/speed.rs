//! Speed tokens: estimated time over actual time, tiered by multiplier
//!
//! The highest multiplier the ratio meets wins. When the payload carries no
//! estimate the engine derives one from trail attributes; with no attributes
//! either, the rule stays silent rather than guess.

use async_trait::async_trait;

use crate::catalog::tokens::SPEED_TIERS;
use crate::engine::evaluator::{Candidate, EvalContext, Evaluator};
use crate::par::estimate_minutes;
use crate::store::StoreError;

/// Token id for an estimated/actual ratio, if any tier is met.
pub fn speed_token_id(estimated_minutes: f64, actual_minutes: f64) -> Option<&'static str> {
    if actual_minutes <= 0.0 || estimated_minutes <= 0.0 {
        return None;
    }
    let factor = estimated_minutes / actual_minutes;
    SPEED_TIERS
        .iter()
        .rev()
        .find(|tier| factor >= tier.multiplier)
        .map(|tier| tier.id)
}

pub struct SpeedTokens;

#[async_trait]
impl Evaluator for SpeedTokens {
    fn name(&self) -> &'static str {
        "speed"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        let Some(actual) = ctx.details.duration_minutes.filter(|m| *m > 0) else {
            return Ok(vec![]);
        };

        let estimated = match ctx.details.estimated_minutes {
            Some(est) => f64::from(est),
            None => match ctx.facts.trail_attributes(ctx.trail_id).await? {
                Some(trail) => estimate_minutes(trail.distance_m, trail.avg_angle),
                None => {
                    tracing::warn!(trail = ctx.trail_id, "No estimate available for speed token");
                    return Ok(vec![]);
                }
            },
        };

        Ok(speed_token_id(estimated, f64::from(actual))
            .map(|id| vec![Candidate::token(id)])
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_met_multiplier_wins() {
        assert_eq!(speed_token_id(100.0, 100.0), Some("swiftfoot_1"));
        assert_eq!(speed_token_id(150.0, 100.0), Some("swiftfoot_2"));
        assert_eq!(speed_token_id(100.0, 40.0), Some("swiftfoot_3"));
        assert_eq!(speed_token_id(800.0, 100.0), Some("swiftfoot_6"));
        assert_eq!(speed_token_id(1000.0, 10.0), Some("swiftfoot_6"));
    }

    #[test]
    fn slower_than_estimate_earns_nothing() {
        assert_eq!(speed_token_id(90.0, 100.0), None);
        assert_eq!(speed_token_id(0.0, 100.0), None);
        assert_eq!(speed_token_id(100.0, 0.0), None);
    }
}
