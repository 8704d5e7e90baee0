//! Weight-carry tokens tiered by load class
//!
//! Each carrying style maps load pounds into one of six classes over
//! half-open intervals; class 1 keeps the bare style id, higher classes
//! suffix the class number.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::catalog::tokens::load_class;
use crate::engine::evaluator::{Candidate, EvalContext, Evaluator};
use crate::model::WeightCarry;
use crate::store::StoreError;

/// Token id for one carry entry; a missing or non-positive load reads as 1 lb.
pub fn weight_token_id(carry: &WeightCarry) -> String {
    let pounds = carry.pounds.filter(|p| *p > 0.0).unwrap_or(1.0);
    let class = load_class(pounds);
    let base = carry.style.base_token();
    if class == 1 {
        base.to_string()
    } else {
        format!("{base}_{class}")
    }
}

pub struct WeightTokens;

#[async_trait]
impl Evaluator for WeightTokens {
    fn name(&self) -> &'static str {
        "weight"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        let mut seen = HashSet::new();
        Ok(ctx
            .details
            .weight
            .iter()
            .map(weight_token_id)
            .filter(|id| seen.insert(id.clone()))
            .map(Candidate::Token)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WeightStyle;

    fn carry(style: WeightStyle, pounds: Option<f64>) -> WeightCarry {
        WeightCarry { style, pounds }
    }

    #[test]
    fn class_one_keeps_bare_id() {
        assert_eq!(
            weight_token_id(&carry(WeightStyle::Pack, Some(8.0))),
            "pack_hauler"
        );
        // Exactly 10 lb still lands in (0, 10]
        assert_eq!(
            weight_token_id(&carry(WeightStyle::Pack, Some(10.0))),
            "pack_hauler"
        );
    }

    #[test]
    fn heavier_loads_suffix_the_class() {
        assert_eq!(
            weight_token_id(&carry(WeightStyle::Vest, Some(30.0))),
            "vest_bound_3"
        );
        assert_eq!(
            weight_token_id(&carry(WeightStyle::Awkward, Some(200.0))),
            "awkward_advantage_6"
        );
    }

    #[test]
    fn missing_load_defaults_to_one_pound() {
        assert_eq!(
            weight_token_id(&carry(WeightStyle::Front, None)),
            "front_loader"
        );
        assert_eq!(
            weight_token_id(&carry(WeightStyle::Front, Some(0.0))),
            "front_loader"
        );
    }
}
