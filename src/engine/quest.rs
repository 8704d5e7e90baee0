//! Quest evaluator: a state machine over cumulative distance
//!
//! locked (no row) -> unlocked (row at level 1) -> leveled-up -> completed.
//! Completed is terminal. Kept out of the default evaluator registry; callers
//! invoke it explicitly through `RewardEngine::evaluate_quest`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::EngineError;
use crate::model::UserQuest;
use crate::store::TrailStore;

/// A quest-level change produced by one evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestEvent {
    Unlocked {
        quest_id: String,
        title: String,
        level: u32,
    },
    LeveledUp {
        quest_id: String,
        title: String,
        level: u32,
        distance_m: f64,
    },
    Completed {
        quest_id: String,
        title: String,
    },
}

pub(crate) async fn run(
    store: &dyn TrailStore,
    user: &str,
    quest_id: &str,
    trail_distance_m: f64,
    now: DateTime<Utc>,
) -> Result<Vec<QuestEvent>, EngineError> {
    let quest = store
        .quest(quest_id)
        .await?
        .ok_or_else(|| EngineError::UnknownQuest(quest_id.to_string()))?;
    let levels = store.quest_levels(quest_id).await?;
    if levels.is_empty() {
        return Err(EngineError::EmptyQuest(quest_id.to_string()));
    }

    let mut events = Vec::new();

    match store.user_quest(user, quest_id).await? {
        None => {
            // Cumulative distance plus the triggering completion's distance.
            // The completion row is already stored, so the trigger counts
            // twice here — inherited behavior, see DESIGN.md.
            let cumulative = store.total_distance_m(user).await? + trail_distance_m;
            if cumulative < levels[0].distance_m {
                return Ok(events);
            }

            let first = &levels[0];
            store
                .insert_user_quest(&UserQuest {
                    user_id: user.to_string(),
                    quest_id: quest_id.to_string(),
                    current_level: first.level,
                    progress_distance_m: cumulative,
                    earned_at: now,
                    updated_at: now,
                })
                .await?;

            events.push(QuestEvent::Unlocked {
                quest_id: quest.id,
                title: quest.title,
                level: first.level,
            });
        }
        Some(row) => {
            // Terminal state: a completed quest never transitions again
            if row.current_level >= quest.max_level {
                return Ok(events);
            }

            let progress = row.progress_distance_m + trail_distance_m;
            let new_level = levels
                .iter()
                .filter(|l| progress >= l.distance_m)
                .map(|l| l.level)
                .max()
                .unwrap_or(levels[0].level);

            store
                .update_user_quest(&UserQuest {
                    current_level: new_level,
                    progress_distance_m: progress,
                    updated_at: now,
                    ..row.clone()
                })
                .await?;

            if new_level > row.current_level {
                events.push(QuestEvent::LeveledUp {
                    quest_id: quest.id.clone(),
                    title: quest.title.clone(),
                    level: new_level,
                    distance_m: progress,
                });
            }
            if new_level >= quest.max_level {
                events.push(QuestEvent::Completed {
                    quest_id: quest.id,
                    title: quest.title,
                });
            }
        }
    }

    Ok(events)
}
