//! Geographic badges: counties, states, national parks, state parks
//!
//! Badge ids are derived deterministically from normalized place names, so
//! the catalog can be seeded ahead of time and the rules never need their own
//! lookup table. Uniqueness is always counted by distinct trail id — hiking
//! the same trail three times earns no county.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::catalog::badges::{
    state_badge_required_counties, COUNTY_BADGE_MIN_TRAILS, NATIONAL_PARK_MIN_TRAILS,
    STATE_PARK_MIN_TRAILS,
};
use crate::engine::evaluator::{Candidate, EvalContext, Evaluator};
use crate::store::{RegionFilter, StoreError};

/// Phrases stripped from park names before id derivation
const PARK_NOISE_PHRASES: &[&str] = &["& Preserve", "& Recreation Area"];

/// Lowercase a place name and collapse whitespace runs to underscores.
pub fn normalize_place(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

fn strip_noise(park_name: &str) -> String {
    let mut cleaned = park_name.to_string();
    for phrase in PARK_NOISE_PHRASES {
        let lower = cleaned.to_lowercase();
        // Byte offsets only line up when lowercasing didn't resize anything
        if lower.len() != cleaned.len() {
            continue;
        }
        if let Some(pos) = lower.find(&phrase.to_lowercase()) {
            cleaned.replace_range(pos..pos + phrase.len(), "");
        }
    }
    cleaned
}

/// `<county>_county_<state>`, e.g. "westmoreland_county_pa"
pub fn county_badge_id(county: &str, state: &str) -> String {
    format!("{}_county_{}", normalize_place(county), state.trim().to_lowercase())
}

/// Normalized park id ending in `_national_park`
pub fn national_park_badge_id(park_name: &str) -> String {
    let mut id = normalize_place(&strip_noise(park_name));
    if !id.ends_with("_national_park") {
        id.push_str("_national_park");
    }
    id
}

/// Normalized park id ending in `_<state>_state_park` for uniqueness
pub fn state_park_badge_id(park_name: &str, state: &str) -> String {
    let mut id = normalize_place(&strip_noise(park_name));
    if !id.ends_with("_state_park") {
        id.push_str("_state_park");
    }
    let state = state.trim().to_lowercase();
    id.replace("_state_park", &format!("_{state}_state_park"))
}

pub fn is_national_park(park_name: &str) -> bool {
    park_name.to_lowercase().contains("national park")
}

pub fn is_state_park(park_name: &str) -> bool {
    park_name.to_lowercase().contains("state park")
}

/// Three distinct trails in the triggering trail's county
pub struct CountyBadges;

#[async_trait]
impl Evaluator for CountyBadges {
    fn name(&self) -> &'static str {
        "county"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        let Some(trail) = ctx.facts.trail_attributes(ctx.trail_id).await? else {
            return Ok(vec![]);
        };

        let region = RegionFilter::County {
            county: trail.county.clone(),
            state: trail.state.clone(),
        };
        let unique = ctx.facts.count_distinct_trails(ctx.user, Some(&region)).await?;
        if unique < COUNTY_BADGE_MIN_TRAILS {
            return Ok(vec![]);
        }

        Ok(vec![Candidate::badge(county_badge_id(
            &trail.county,
            &trail.state,
        ))])
    }
}

/// Five county badges within the triggering trail's state (Delaware: three).
/// A derived-from-derived rule: it reads prior awards, not raw completions.
pub struct StateBadges;

#[async_trait]
impl Evaluator for StateBadges {
    fn name(&self) -> &'static str {
        "state"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        let Some(trail) = ctx.facts.trail_attributes(ctx.trail_id).await? else {
            return Ok(vec![]);
        };

        let state = trail.state.trim().to_lowercase();
        let county_suffix = format!("_county_{state}");
        let held: HashSet<String> = ctx
            .facts
            .list_badge_ids(ctx.user, None)
            .await?
            .into_iter()
            .filter(|id| id.ends_with(&county_suffix))
            .collect();

        if (held.len() as u64) < state_badge_required_counties(&state) {
            return Ok(vec![]);
        }

        Ok(vec![Candidate::badge(format!("state_{state}"))])
    }
}

/// Three distinct trails in one national park
pub struct NationalParkBadges;

#[async_trait]
impl Evaluator for NationalParkBadges {
    fn name(&self) -> &'static str {
        "national_park"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        let Some(trail) = ctx.facts.trail_attributes(ctx.trail_id).await? else {
            return Ok(vec![]);
        };
        let Some(park_name) = trail.park_name.as_deref() else {
            return Ok(vec![]);
        };
        if !is_national_park(park_name) {
            return Ok(vec![]);
        }

        let region = RegionFilter::Park(park_name.to_string());
        let unique = ctx.facts.count_distinct_trails(ctx.user, Some(&region)).await?;
        if unique < NATIONAL_PARK_MIN_TRAILS {
            return Ok(vec![]);
        }

        Ok(vec![Candidate::badge(national_park_badge_id(park_name))])
    }
}

/// Two distinct trails in one state park
pub struct StateParkBadges;

#[async_trait]
impl Evaluator for StateParkBadges {
    fn name(&self) -> &'static str {
        "state_park"
    }

    async fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Candidate>, StoreError> {
        let Some(trail) = ctx.facts.trail_attributes(ctx.trail_id).await? else {
            return Ok(vec![]);
        };
        let Some(park_name) = trail.park_name.as_deref() else {
            return Ok(vec![]);
        };
        if !is_state_park(park_name) {
            return Ok(vec![]);
        }

        let region = RegionFilter::Park(park_name.to_string());
        let unique = ctx.facts.count_distinct_trails(ctx.user, Some(&region)).await?;
        if unique < STATE_PARK_MIN_TRAILS {
            return Ok(vec![]);
        }

        Ok(vec![Candidate::badge(state_park_badge_id(
            park_name,
            &trail.state,
        ))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn county_ids_normalize_whitespace_and_case() {
        assert_eq!(
            county_badge_id("Westmoreland", "PA"),
            "westmoreland_county_pa"
        );
        assert_eq!(county_badge_id("San Juan", "co"), "san_juan_county_co");
    }

    #[test]
    fn national_park_ids_strip_noise_phrases() {
        assert_eq!(
            national_park_badge_id("Cuyahoga Valley National Park"),
            "cuyahoga_valley_national_park"
        );
        assert_eq!(
            national_park_badge_id("Denali National Park & Preserve"),
            "denali_national_park"
        );
        assert_eq!(
            national_park_badge_id("Glen Canyon & Recreation Area"),
            "glen_canyon_national_park"
        );
    }

    #[test]
    fn state_park_ids_embed_the_state() {
        assert_eq!(
            state_park_badge_id("Ohiopyle State Park", "PA"),
            "ohiopyle_pa_state_park"
        );
        // Missing suffix is appended before the state is spliced in
        assert_eq!(state_park_badge_id("Hocking Hills", "oh"), "hocking_hills_oh_state_park");
    }

    #[test]
    fn park_kind_detection_is_case_insensitive() {
        assert!(is_national_park("Denali NATIONAL PARK & Preserve"));
        assert!(!is_national_park("Ohiopyle State Park"));
        assert!(is_state_park("Ohiopyle state park"));
    }
}
