//! Read-only query façade the evaluator set shares
//!
//! Evaluators only ever see this façade, so the type system keeps them from
//! reaching the award write path. Queries are side-effect-free and cheap to
//! repeat; rules issue overlapping queries independently rather than share a
//! cache, keeping each rule independently testable.

use crate::model::{Completion, Token, TrailAttributes};
use crate::store::{RegionFilter, StoreError, TrailStore};

/// Facts a rule can gather about a user and the triggering trail
#[derive(Clone, Copy)]
pub struct Facts<'a> {
    store: &'a dyn TrailStore,
}

impl<'a> Facts<'a> {
    pub fn new(store: &'a dyn TrailStore) -> Self {
        Self { store }
    }

    pub async fn count_completions(&self, user: &str) -> Result<u64, StoreError> {
        self.store.count_completions(user).await
    }

    pub async fn count_distinct_trails(
        &self,
        user: &str,
        region: Option<&RegionFilter>,
    ) -> Result<u64, StoreError> {
        self.store.count_distinct_trails(user, region).await
    }

    pub async fn completions_of_trail(
        &self,
        user: &str,
        trail_id: &str,
    ) -> Result<u64, StoreError> {
        self.store.completions_of_trail(user, trail_id).await
    }

    pub async fn list_completions(&self, user: &str) -> Result<Vec<Completion>, StoreError> {
        self.store.list_completions(user).await
    }

    pub async fn trail_attributes(
        &self,
        trail_id: &str,
    ) -> Result<Option<TrailAttributes>, StoreError> {
        self.store.trail_attributes(trail_id).await
    }

    pub async fn total_distance_m(&self, user: &str) -> Result<f64, StoreError> {
        self.store.total_distance_m(user).await
    }

    pub async fn total_elevation_gain_m(&self, user: &str) -> Result<f64, StoreError> {
        self.store.total_elevation_gain_m(user).await
    }

    pub async fn list_badge_ids(
        &self,
        user: &str,
        id_prefix: Option<&str>,
    ) -> Result<Vec<String>, StoreError> {
        self.store.list_badge_ids(user, id_prefix).await
    }

    /// Token catalog rows for a candidate id set; unknown ids are absent.
    pub async fn token_catalog(&self, ids: &[String]) -> Result<Vec<Token>, StoreError> {
        self.store.token_catalog(ids).await
    }
}
