//! Store contract consumed by the fact gatherer and award writer
//!
//! The engine reads completions and trails through this trait and owns the
//! write path for user badges, tokens, and quest rows. Implementations must
//! enforce the at-most-once award invariant with a uniqueness constraint on
//! `(user, badge)` and `(user, token, trail)` — the engine's pre-insert check
//! is an optimization, not the guarantee (see DESIGN.md).

mod sqlite;

pub use sqlite::SqliteStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::model::{Badge, Completion, Quest, QuestLevel, Token, TrailAttributes, UserQuest};

/// Errors from the persistent store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store query failed: {0}")]
    Query(String),

    #[error("store write failed: {0}")]
    Write(String),
}

impl StoreError {
    pub fn query(err: impl std::fmt::Display) -> Self {
        Self::Query(err.to_string())
    }

    pub fn write(err: impl std::fmt::Display) -> Self {
        Self::Write(err.to_string())
    }
}

/// Region filter for distinct-trail counting
#[derive(Debug, Clone)]
pub enum RegionFilter {
    County { county: String, state: String },
    State(String),
    Park(String),
}

/// Narrow query/insert contract against the persistent store.
///
/// All read methods are side-effect-free and tolerate redundant calls;
/// evaluators issue overlapping queries independently rather than share a
/// cache, so every rule stays independently testable.
#[async_trait]
pub trait TrailStore: Send + Sync {
    // ---- completion facts (read-only) ----

    /// Total completions recorded for a user, repeats included.
    async fn count_completions(&self, user: &str) -> Result<u64, StoreError>;

    /// Distinct completed trails, optionally restricted to a region.
    async fn count_distinct_trails(
        &self,
        user: &str,
        region: Option<&RegionFilter>,
    ) -> Result<u64, StoreError>;

    /// Times this user has completed one specific trail.
    async fn completions_of_trail(&self, user: &str, trail_id: &str) -> Result<u64, StoreError>;

    /// Full completion history, ordered oldest first.
    async fn list_completions(&self, user: &str) -> Result<Vec<Completion>, StoreError>;

    /// Attributes of one trail, if it exists.
    async fn trail_attributes(&self, trail_id: &str)
        -> Result<Option<TrailAttributes>, StoreError>;

    /// Sum of trail distance over every completion (repeats count again).
    async fn total_distance_m(&self, user: &str) -> Result<f64, StoreError>;

    /// Sum of trail elevation gain over every completion.
    async fn total_elevation_gain_m(&self, user: &str) -> Result<f64, StoreError>;

    // ---- award records ----

    /// Badge ids a user holds, optionally limited to an id prefix.
    async fn list_badge_ids(
        &self,
        user: &str,
        id_prefix: Option<&str>,
    ) -> Result<Vec<String>, StoreError>;

    /// Token ids a user holds for one trail.
    async fn list_token_ids(&self, user: &str, trail_id: &str) -> Result<Vec<String>, StoreError>;

    /// Insert one badge row. Returns false when the row already existed.
    async fn insert_badge(&self, user: &str, badge_id: &str) -> Result<bool, StoreError>;

    /// Insert one token row. Returns false when the row already existed.
    async fn insert_token(
        &self,
        user: &str,
        token_id: &str,
        trail_id: &str,
    ) -> Result<bool, StoreError>;

    // ---- catalog (static seed data) ----

    /// Badge catalog rows for the given ids; unknown ids are simply absent.
    async fn badge_catalog(&self, ids: &[String]) -> Result<Vec<Badge>, StoreError>;

    /// Token catalog rows for the given ids; unknown ids are simply absent.
    async fn token_catalog(&self, ids: &[String]) -> Result<Vec<Token>, StoreError>;

    // ---- quests ----

    async fn quest(&self, quest_id: &str) -> Result<Option<Quest>, StoreError>;

    /// Ordered level tiers for a quest, ascending by level.
    async fn quest_levels(&self, quest_id: &str) -> Result<Vec<QuestLevel>, StoreError>;

    async fn user_quest(&self, user: &str, quest_id: &str)
        -> Result<Option<UserQuest>, StoreError>;

    async fn insert_user_quest(&self, row: &UserQuest) -> Result<(), StoreError>;

    async fn update_user_quest(&self, row: &UserQuest) -> Result<(), StoreError>;
}

/// Millisecond epoch timestamp for a stored instant.
pub(crate) fn to_millis(at: DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

/// Stored millisecond timestamp back to an instant; clamps garbage to epoch.
pub(crate) fn from_millis(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap_or_default()
}
