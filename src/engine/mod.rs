//! Reward engine: orchestrates the evaluator set over one completion
//!
//! Control flow: completion event -> fact gathering -> concurrent fan-out of
//! the evaluator set -> merge -> catalog resolution -> (reward mode)
//! idempotency guard + award writer, or (detect mode) the full candidate
//! list unpersisted.

pub mod badges;
pub mod tokens;

mod evaluator;
mod facts;
mod quest;

pub use evaluator::{Candidate, EvalContext, Evaluator, EVALUATOR_SET};
pub use facts::Facts;
pub use quest::QuestEvent;

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::join_all;

use crate::error::EngineError;
use crate::model::{Badge, CompletionDetails, Mode, Rewards, Token};
use crate::store::TrailStore;

/// Entry point for reward evaluation. Request-scoped and stateless; safe to
/// share and to call concurrently.
pub struct RewardEngine {
    store: Arc<dyn TrailStore>,
}

impl RewardEngine {
    pub fn new(store: Arc<dyn TrailStore>) -> Self {
        Self { store }
    }

    /// Evaluate one completed-trail submission.
    ///
    /// Call after the completion row has been durably written. Reward mode
    /// returns only awards persisted by this call; detect mode returns every
    /// award that currently qualifies and writes nothing.
    pub async fn evaluate(
        &self,
        user: &str,
        trail_id: &str,
        details: &CompletionDetails,
        mode: Mode,
    ) -> Result<Rewards, EngineError> {
        self.evaluate_at(user, trail_id, details, mode, Utc::now())
            .await
    }

    /// [`Self::evaluate`] with an explicit evaluation instant, so
    /// calendar-sensitive rules can be pinned in tests.
    pub async fn evaluate_at(
        &self,
        user: &str,
        trail_id: &str,
        details: &CompletionDetails,
        mode: Mode,
        now: DateTime<Utc>,
    ) -> Result<Rewards, EngineError> {
        let ctx = EvalContext {
            user,
            trail_id,
            details,
            mode,
            now,
            facts: Facts::new(self.store.as_ref()),
        };

        // Fan out and join; a failing evaluator is logged and contributes
        // nothing, without blocking its siblings.
        let runs = EVALUATOR_SET.iter().map(|evaluator| {
            let ctx = &ctx;
            async move { (evaluator.name(), evaluator.evaluate(ctx).await) }
        });
        let results = join_all(runs).await;

        let mut badge_ids = Vec::new();
        let mut token_ids = Vec::new();
        let mut seen = HashSet::new();
        for (name, result) in results {
            match result {
                Ok(candidates) => {
                    tracing::debug!(
                        evaluator = name,
                        candidates = candidates.len(),
                        "Evaluator finished"
                    );
                    for candidate in candidates {
                        match candidate {
                            Candidate::Badge(id) => {
                                if seen.insert(("badge", id.clone())) {
                                    badge_ids.push(id);
                                }
                            }
                            Candidate::Token(id) => {
                                if seen.insert(("token", id.clone())) {
                                    token_ids.push(id);
                                }
                            }
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(evaluator = name, "Evaluator failed, skipping: {e}");
                }
            }
        }

        // Resolve candidates against the catalog. A computed id with no
        // catalog row points at a missing seed entry.
        let badges = self.store.badge_catalog(&badge_ids).await?;
        warn_missing("badge", &badge_ids, badges.iter().map(|b| b.id.as_str()));
        let tokens = self.store.token_catalog(&token_ids).await?;
        warn_missing("token", &token_ids, tokens.iter().map(|t| t.id.as_str()));

        match mode {
            Mode::Detect => Ok(Rewards { badges, tokens }),
            Mode::Reward => self.persist(user, trail_id, badges, tokens).await,
        }
    }

    /// Run the quest state machine for one quest. Not part of the default
    /// evaluator set; callers opt in per submission.
    pub async fn evaluate_quest(
        &self,
        user: &str,
        quest_id: &str,
        trail_distance_m: f64,
    ) -> Result<Vec<QuestEvent>, EngineError> {
        quest::run(
            self.store.as_ref(),
            user,
            quest_id,
            trail_distance_m,
            Utc::now(),
        )
        .await
    }

    /// Idempotency guard + award writer.
    ///
    /// Filters candidates the user already holds, then inserts one row per
    /// survivor. An insert the uniqueness backstop swallows reads as
    /// "already awarded"; an insert that errors drops that award from the
    /// returned list and nothing else.
    async fn persist(
        &self,
        user: &str,
        trail_id: &str,
        badges: Vec<Badge>,
        tokens: Vec<Token>,
    ) -> Result<Rewards, EngineError> {
        let held: HashSet<String> = self
            .store
            .list_badge_ids(user, None)
            .await?
            .into_iter()
            .collect();
        let mut new_badges = Vec::new();
        for badge in badges.into_iter().filter(|b| !held.contains(&b.id)) {
            match self.store.insert_badge(user, &badge.id).await {
                Ok(true) => new_badges.push(badge),
                Ok(false) => {
                    tracing::debug!(badge = %badge.id, "Lost insert race, already awarded");
                }
                Err(e) => tracing::warn!(badge = %badge.id, "Failed to write badge: {e}"),
            }
        }

        let held: HashSet<String> = self
            .store
            .list_token_ids(user, trail_id)
            .await?
            .into_iter()
            .collect();
        let mut new_tokens = Vec::new();
        for token in tokens.into_iter().filter(|t| !held.contains(&t.id)) {
            match self.store.insert_token(user, &token.id, trail_id).await {
                Ok(true) => new_tokens.push(token),
                Ok(false) => {
                    tracing::debug!(token = %token.id, "Lost insert race, already awarded");
                }
                Err(e) => tracing::warn!(token = %token.id, "Failed to write token: {e}"),
            }
        }

        Ok(Rewards {
            badges: new_badges,
            tokens: new_tokens,
        })
    }
}

fn warn_missing<'a>(kind: &str, requested: &[String], found: impl Iterator<Item = &'a str>) {
    let found: HashSet<&str> = found.collect();
    for id in requested {
        if !found.contains(id.as_str()) {
            tracing::warn!(kind, id = %id, "Candidate award has no catalog row, skipping");
        }
    }
}
