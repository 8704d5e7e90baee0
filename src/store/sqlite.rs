//! SQLite implementation of the store contract
//!
//! Manages the `~/.waymark/waymark.db` database. WAL mode keeps concurrent
//! evaluation runs from blocking each other; the UNIQUE constraints on the
//! award tables are the real at-most-once backstop for the check-then-insert
//! race described in DESIGN.md.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::Connection;

use super::{from_millis, to_millis, RegionFilter, StoreError, TrailStore};
use crate::model::{
    Badge, Completion, CompletionDetails, Quest, QuestLevel, Token, TrailAttributes, UserQuest,
};

/// Database wrapper shared across the engine
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open or create the database at the default location (~/.waymark/waymark.db)
    pub fn open_default() -> Result<Self> {
        let base = dirs::home_dir().context("No home directory for default db location")?;
        Self::open(&base.join(".waymark").join("waymark.db"))
    }

    /// Open or create the database at a specific path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create db dir: {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open db: {}", path.display()))?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// In-memory database, mainly for tests and previews.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().expect("Store lock poisoned")
    }

    fn init_schema(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    // ========================================
    // SEEDING (external to the engine proper)
    // ========================================

    /// Upsert a trail row; trail data is owned by the ingestion pipeline.
    pub fn upsert_trail(&self, trail_id: &str, attrs: &TrailAttributes) -> Result<()> {
        let tags = serde_json::to_string(&attrs.tags)?;
        self.conn().execute(
            r#"INSERT OR REPLACE INTO trails
               (id, state, county, park_name, distance_m, elevation_gain_m, avg_angle, max_angle, tags)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"#,
            rusqlite::params![
                trail_id,
                attrs.state,
                attrs.county,
                attrs.park_name,
                attrs.distance_m,
                attrs.elevation_gain_m,
                attrs.avg_angle,
                attrs.max_angle,
                tags,
            ],
        )?;
        Ok(())
    }

    /// Record a completion; the completion-recording flow calls this before
    /// the engine evaluates.
    pub fn record_completion(&self, user: &str, completion: &Completion) -> Result<()> {
        let details = serde_json::to_string(&completion.details)?;
        self.conn().execute(
            r#"INSERT INTO completions (user_id, trail_id, completed_at, duration_seconds, details)
               VALUES (?1, ?2, ?3, ?4, ?5)"#,
            rusqlite::params![
                user,
                completion.trail_id,
                to_millis(completion.completed_at),
                completion.duration_seconds,
                details,
            ],
        )?;
        Ok(())
    }

    /// Seed one badge catalog row.
    pub fn seed_badge(&self, badge: &Badge) -> Result<()> {
        self.conn().execute(
            "INSERT OR REPLACE INTO badges (id, title, description, icon) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![badge.id, badge.title, badge.description, badge.icon],
        )?;
        Ok(())
    }

    /// Seed one token catalog row.
    pub fn seed_token(&self, token: &Token) -> Result<()> {
        self.conn().execute(
            "INSERT OR REPLACE INTO tokens (id, title, description, icon) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![token.id, token.title, token.description, token.icon],
        )?;
        Ok(())
    }

    /// Seed a quest and its ordered level tiers.
    pub fn seed_quest(&self, quest: &Quest, levels: &[QuestLevel]) -> Result<()> {
        let conn = self.conn();
        conn.execute(
            "INSERT OR REPLACE INTO quests (id, title, max_level) VALUES (?1, ?2, ?3)",
            rusqlite::params![quest.id, quest.title, quest.max_level],
        )?;
        for level in levels {
            conn.execute(
                "INSERT OR REPLACE INTO quest_levels (quest_id, level, distance_m) VALUES (?1, ?2, ?3)",
                rusqlite::params![level.quest_id, level.level, level.distance_m],
            )?;
        }
        Ok(())
    }
}

#[async_trait]
impl TrailStore for SqliteStore {
    async fn count_completions(&self, user: &str) -> Result<u64, StoreError> {
        self.conn()
            .query_row(
                "SELECT COUNT(*) FROM completions WHERE user_id = ?1",
                [user],
                |r| r.get(0),
            )
            .map_err(StoreError::query)
    }

    async fn count_distinct_trails(
        &self,
        user: &str,
        region: Option<&RegionFilter>,
    ) -> Result<u64, StoreError> {
        let conn = self.conn();
        let result = match region {
            None => conn.query_row(
                "SELECT COUNT(DISTINCT trail_id) FROM completions WHERE user_id = ?1",
                [user],
                |r| r.get(0),
            ),
            Some(RegionFilter::County { county, state }) => conn.query_row(
                r#"SELECT COUNT(DISTINCT c.trail_id)
                   FROM completions c JOIN trails t ON t.id = c.trail_id
                   WHERE c.user_id = ?1 AND t.county = ?2 AND t.state = ?3"#,
                rusqlite::params![user, county, state],
                |r| r.get(0),
            ),
            Some(RegionFilter::State(state)) => conn.query_row(
                r#"SELECT COUNT(DISTINCT c.trail_id)
                   FROM completions c JOIN trails t ON t.id = c.trail_id
                   WHERE c.user_id = ?1 AND t.state = ?2"#,
                rusqlite::params![user, state],
                |r| r.get(0),
            ),
            Some(RegionFilter::Park(park)) => conn.query_row(
                r#"SELECT COUNT(DISTINCT c.trail_id)
                   FROM completions c JOIN trails t ON t.id = c.trail_id
                   WHERE c.user_id = ?1 AND t.park_name = ?2"#,
                rusqlite::params![user, park],
                |r| r.get(0),
            ),
        };
        result.map_err(StoreError::query)
    }

    async fn completions_of_trail(&self, user: &str, trail_id: &str) -> Result<u64, StoreError> {
        self.conn()
            .query_row(
                "SELECT COUNT(*) FROM completions WHERE user_id = ?1 AND trail_id = ?2",
                [user, trail_id],
                |r| r.get(0),
            )
            .map_err(StoreError::query)
    }

    async fn list_completions(&self, user: &str) -> Result<Vec<Completion>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare(
                r#"SELECT trail_id, completed_at, duration_seconds, details
                   FROM completions WHERE user_id = ?1 ORDER BY completed_at ASC"#,
            )
            .map_err(StoreError::query)?;
        let rows = stmt
            .query_map([user], |r| {
                let details_json: String = r.get(3)?;
                Ok(Completion {
                    trail_id: r.get(0)?,
                    completed_at: from_millis(r.get(1)?),
                    duration_seconds: r.get(2)?,
                    details: parse_details(&details_json),
                })
            })
            .map_err(StoreError::query)?
            .filter_map(|r| r.ok())
            .collect();
        Ok(rows)
    }

    async fn trail_attributes(
        &self,
        trail_id: &str,
    ) -> Result<Option<TrailAttributes>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare(
                r#"SELECT state, county, park_name, distance_m, elevation_gain_m,
                          avg_angle, max_angle, tags
                   FROM trails WHERE id = ?1"#,
            )
            .map_err(StoreError::query)?;
        let mut rows = stmt
            .query_map([trail_id], |r| {
                let tags_json: String = r.get(7)?;
                Ok(TrailAttributes {
                    state: r.get(0)?,
                    county: r.get(1)?,
                    park_name: r.get(2)?,
                    distance_m: r.get(3)?,
                    elevation_gain_m: r.get(4)?,
                    avg_angle: r.get(5)?,
                    max_angle: r.get(6)?,
                    tags: serde_json::from_str(&tags_json).unwrap_or_default(),
                })
            })
            .map_err(StoreError::query)?;
        match rows.next() {
            Some(row) => Ok(Some(row.map_err(StoreError::query)?)),
            None => Ok(None),
        }
    }

    async fn total_distance_m(&self, user: &str) -> Result<f64, StoreError> {
        self.conn()
            .query_row(
                r#"SELECT COALESCE(SUM(t.distance_m), 0.0)
                   FROM completions c JOIN trails t ON t.id = c.trail_id
                   WHERE c.user_id = ?1"#,
                [user],
                |r| r.get(0),
            )
            .map_err(StoreError::query)
    }

    async fn total_elevation_gain_m(&self, user: &str) -> Result<f64, StoreError> {
        self.conn()
            .query_row(
                r#"SELECT COALESCE(SUM(t.elevation_gain_m), 0.0)
                   FROM completions c JOIN trails t ON t.id = c.trail_id
                   WHERE c.user_id = ?1"#,
                [user],
                |r| r.get(0),
            )
            .map_err(StoreError::query)
    }

    async fn list_badge_ids(
        &self,
        user: &str,
        id_prefix: Option<&str>,
    ) -> Result<Vec<String>, StoreError> {
        let conn = self.conn();
        let mut stmt;
        let rows = match id_prefix {
            Some(prefix) => {
                // Escape LIKE wildcards so "state_" cannot match "states_3"
                let escaped = prefix.replace('\\', "\\\\").replace('_', "\\_").replace('%', "\\%");
                stmt = conn
                    .prepare(
                        "SELECT badge_id FROM user_badges WHERE user_id = ?1 AND badge_id LIKE ?2 ESCAPE '\\'",
                    )
                    .map_err(StoreError::query)?;
                stmt.query_map(rusqlite::params![user, format!("{escaped}%")], |r| r.get(0))
                    .map_err(StoreError::query)?
                    .filter_map(|r| r.ok())
                    .collect()
            }
            None => {
                stmt = conn
                    .prepare("SELECT badge_id FROM user_badges WHERE user_id = ?1")
                    .map_err(StoreError::query)?;
                stmt.query_map([user], |r| r.get(0))
                    .map_err(StoreError::query)?
                    .filter_map(|r| r.ok())
                    .collect()
            }
        };
        Ok(rows)
    }

    async fn list_token_ids(&self, user: &str, trail_id: &str) -> Result<Vec<String>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare("SELECT token_id FROM user_tokens WHERE user_id = ?1 AND trail_id = ?2")
            .map_err(StoreError::query)?;
        let rows = stmt
            .query_map([user, trail_id], |r| r.get(0))
            .map_err(StoreError::query)?
            .filter_map(|r| r.ok())
            .collect();
        Ok(rows)
    }

    async fn insert_badge(&self, user: &str, badge_id: &str) -> Result<bool, StoreError> {
        let changed = self
            .conn()
            .execute(
                "INSERT OR IGNORE INTO user_badges (user_id, badge_id, earned_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![user, badge_id, Utc::now().timestamp_millis()],
            )
            .map_err(StoreError::write)?;
        Ok(changed > 0)
    }

    async fn insert_token(
        &self,
        user: &str,
        token_id: &str,
        trail_id: &str,
    ) -> Result<bool, StoreError> {
        let changed = self
            .conn()
            .execute(
                r#"INSERT OR IGNORE INTO user_tokens (user_id, token_id, trail_id, earned_at)
                   VALUES (?1, ?2, ?3, ?4)"#,
                rusqlite::params![user, token_id, trail_id, Utc::now().timestamp_millis()],
            )
            .map_err(StoreError::write)?;
        Ok(changed > 0)
    }

    async fn badge_catalog(&self, ids: &[String]) -> Result<Vec<Badge>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare("SELECT id, title, description, icon FROM badges WHERE id = ?1")
            .map_err(StoreError::query)?;
        let mut found = Vec::with_capacity(ids.len());
        for id in ids {
            let row = stmt
                .query_map([id], |r| {
                    Ok(Badge {
                        id: r.get(0)?,
                        title: r.get(1)?,
                        description: r.get(2)?,
                        icon: r.get(3)?,
                    })
                })
                .map_err(StoreError::query)?
                .filter_map(|r| r.ok())
                .next();
            if let Some(badge) = row {
                found.push(badge);
            }
        }
        Ok(found)
    }

    async fn token_catalog(&self, ids: &[String]) -> Result<Vec<Token>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare("SELECT id, title, description, icon FROM tokens WHERE id = ?1")
            .map_err(StoreError::query)?;
        let mut found = Vec::with_capacity(ids.len());
        for id in ids {
            let row = stmt
                .query_map([id], |r| {
                    Ok(Token {
                        id: r.get(0)?,
                        title: r.get(1)?,
                        description: r.get(2)?,
                        icon: r.get(3)?,
                    })
                })
                .map_err(StoreError::query)?
                .filter_map(|r| r.ok())
                .next();
            if let Some(token) = row {
                found.push(token);
            }
        }
        Ok(found)
    }

    async fn quest(&self, quest_id: &str) -> Result<Option<Quest>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare("SELECT id, title, max_level FROM quests WHERE id = ?1")
            .map_err(StoreError::query)?;
        let row = stmt
            .query_map([quest_id], |r| {
                Ok(Quest {
                    id: r.get(0)?,
                    title: r.get(1)?,
                    max_level: r.get(2)?,
                })
            })
            .map_err(StoreError::query)?
            .filter_map(|r| r.ok())
            .next();
        Ok(row)
    }

    async fn quest_levels(&self, quest_id: &str) -> Result<Vec<QuestLevel>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare(
                "SELECT quest_id, level, distance_m FROM quest_levels WHERE quest_id = ?1 ORDER BY level ASC",
            )
            .map_err(StoreError::query)?;
        let rows = stmt
            .query_map([quest_id], |r| {
                Ok(QuestLevel {
                    quest_id: r.get(0)?,
                    level: r.get(1)?,
                    distance_m: r.get(2)?,
                })
            })
            .map_err(StoreError::query)?
            .filter_map(|r| r.ok())
            .collect();
        Ok(rows)
    }

    async fn user_quest(
        &self,
        user: &str,
        quest_id: &str,
    ) -> Result<Option<UserQuest>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare(
                r#"SELECT user_id, quest_id, current_level, progress, earned_at, updated_at
                   FROM user_quests WHERE user_id = ?1 AND quest_id = ?2"#,
            )
            .map_err(StoreError::query)?;
        let row = stmt
            .query_map([user, quest_id], |r| {
                let progress_json: String = r.get(3)?;
                Ok(UserQuest {
                    user_id: r.get(0)?,
                    quest_id: r.get(1)?,
                    current_level: r.get(2)?,
                    progress_distance_m: parse_progress_distance(&progress_json),
                    earned_at: from_millis(r.get(4)?),
                    updated_at: from_millis(r.get(5)?),
                })
            })
            .map_err(StoreError::query)?
            .filter_map(|r| r.ok())
            .next();
        Ok(row)
    }

    async fn insert_user_quest(&self, row: &UserQuest) -> Result<(), StoreError> {
        self.conn()
            .execute(
                r#"INSERT OR IGNORE INTO user_quests
                   (user_id, quest_id, current_level, progress, earned_at, updated_at)
                   VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
                rusqlite::params![
                    row.user_id,
                    row.quest_id,
                    row.current_level,
                    progress_json(row.progress_distance_m),
                    to_millis(row.earned_at),
                    to_millis(row.updated_at),
                ],
            )
            .map_err(StoreError::write)?;
        Ok(())
    }

    async fn update_user_quest(&self, row: &UserQuest) -> Result<(), StoreError> {
        self.conn()
            .execute(
                r#"UPDATE user_quests
                   SET current_level = ?3, progress = ?4, updated_at = ?5
                   WHERE user_id = ?1 AND quest_id = ?2"#,
                rusqlite::params![
                    row.user_id,
                    row.quest_id,
                    row.current_level,
                    progress_json(row.progress_distance_m),
                    to_millis(row.updated_at),
                ],
            )
            .map_err(StoreError::write)?;
        Ok(())
    }
}

/// Detail payloads are free-form user input; a row that fails to parse reads
/// as an empty payload rather than poisoning the whole history.
fn parse_details(json: &str) -> CompletionDetails {
    serde_json::from_str(json).unwrap_or_else(|e| {
        tracing::warn!("Unreadable completion details, treating as empty: {e}");
        CompletionDetails::default()
    })
}

fn parse_progress_distance(json: &str) -> f64 {
    serde_json::from_str::<serde_json::Value>(json)
        .ok()
        .and_then(|v| v.get("distance").and_then(|d| d.as_f64()))
        .unwrap_or(0.0)
}

fn progress_json(distance_m: f64) -> String {
    serde_json::json!({ "distance": distance_m }).to_string()
}

/// SQL schema. The UNIQUE constraints on user_badges and user_tokens are the
/// store-layer at-most-once invariant; INSERT OR IGNORE makes the loser of a
/// concurrent duplicate evaluation observe "already awarded".
const SCHEMA_SQL: &str = r#"
-- Trails (read-only to the engine, owned by the ingestion pipeline)
CREATE TABLE IF NOT EXISTS trails (
    id TEXT PRIMARY KEY,
    state TEXT NOT NULL,
    county TEXT NOT NULL,
    park_name TEXT,
    distance_m REAL NOT NULL DEFAULT 0,
    elevation_gain_m REAL NOT NULL DEFAULT 0,
    avg_angle REAL NOT NULL DEFAULT 0,
    max_angle REAL NOT NULL DEFAULT 0,
    tags TEXT NOT NULL DEFAULT '[]'
);

-- Completions (read-only to the engine, written by the completion flow)
CREATE TABLE IF NOT EXISTS completions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    trail_id TEXT NOT NULL,
    completed_at INTEGER NOT NULL,
    duration_seconds INTEGER NOT NULL DEFAULT 0,
    details TEXT NOT NULL DEFAULT '{}'
);
CREATE INDEX IF NOT EXISTS idx_completions_user ON completions(user_id, completed_at);
CREATE INDEX IF NOT EXISTS idx_completions_trail ON completions(user_id, trail_id);

-- Award catalog (static seed data)
CREATE TABLE IF NOT EXISTS badges (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    icon TEXT NOT NULL DEFAULT ''
);
CREATE TABLE IF NOT EXISTS tokens (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    icon TEXT NOT NULL DEFAULT ''
);

-- Award records; the UNIQUE constraints uphold at-most-once
CREATE TABLE IF NOT EXISTS user_badges (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    badge_id TEXT NOT NULL,
    earned_at INTEGER NOT NULL,
    UNIQUE(user_id, badge_id)
);
CREATE INDEX IF NOT EXISTS idx_user_badges_user ON user_badges(user_id);

CREATE TABLE IF NOT EXISTS user_tokens (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    token_id TEXT NOT NULL,
    trail_id TEXT NOT NULL,
    earned_at INTEGER NOT NULL,
    UNIQUE(user_id, token_id, trail_id)
);
CREATE INDEX IF NOT EXISTS idx_user_tokens_user ON user_tokens(user_id, trail_id);

-- Quests
CREATE TABLE IF NOT EXISTS quests (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    max_level INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS quest_levels (
    quest_id TEXT NOT NULL,
    level INTEGER NOT NULL,
    distance_m REAL NOT NULL,
    PRIMARY KEY (quest_id, level)
);
CREATE TABLE IF NOT EXISTS user_quests (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    quest_id TEXT NOT NULL,
    current_level INTEGER NOT NULL,
    progress TEXT NOT NULL DEFAULT '{}',
    earned_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL,
    UNIQUE(user_id, quest_id)
);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn trail(state: &str, county: &str, park: Option<&str>) -> TrailAttributes {
        TrailAttributes {
            state: state.to_string(),
            county: county.to_string(),
            park_name: park.map(str::to_string),
            distance_m: 5000.0,
            elevation_gain_m: 120.0,
            avg_angle: 4.0,
            max_angle: 15.0,
            tags: vec![],
        }
    }

    fn completion(trail_id: &str, y: i32, m: u32, d: u32) -> Completion {
        Completion {
            trail_id: trail_id.to_string(),
            completed_at: Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap(),
            duration_seconds: 3600,
            details: CompletionDetails::default(),
        }
    }

    #[tokio::test]
    async fn open_and_count_distinct() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::open(&dir.path().join("test.db")).unwrap();

        store.upsert_trail("t1", &trail("pa", "Westmoreland", None)).unwrap();
        store.upsert_trail("t2", &trail("pa", "Westmoreland", None)).unwrap();
        store.upsert_trail("t3", &trail("oh", "Summit", None)).unwrap();

        store.record_completion("u1", &completion("t1", 2026, 5, 1)).unwrap();
        store.record_completion("u1", &completion("t1", 2026, 5, 2)).unwrap();
        store.record_completion("u1", &completion("t2", 2026, 5, 3)).unwrap();
        store.record_completion("u1", &completion("t3", 2026, 5, 4)).unwrap();

        assert_eq!(store.count_completions("u1").await.unwrap(), 4);
        assert_eq!(store.count_distinct_trails("u1", None).await.unwrap(), 3);

        let county = RegionFilter::County {
            county: "Westmoreland".to_string(),
            state: "pa".to_string(),
        };
        // Repeat completions of t1 count once
        assert_eq!(
            store.count_distinct_trails("u1", Some(&county)).await.unwrap(),
            2
        );
        assert_eq!(store.completions_of_trail("u1", "t1").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn award_inserts_are_idempotent() {
        let store = SqliteStore::open_in_memory().unwrap();

        assert!(store.insert_badge("u1", "first_steps").await.unwrap());
        // Second insert hits the UNIQUE constraint and reports nothing new
        assert!(!store.insert_badge("u1", "first_steps").await.unwrap());
        assert_eq!(store.list_badge_ids("u1", None).await.unwrap().len(), 1);

        assert!(store.insert_token("u1", "duck_walk", "t1").await.unwrap());
        assert!(!store.insert_token("u1", "duck_walk", "t1").await.unwrap());
        // Same token on a different trail is a distinct award
        assert!(store.insert_token("u1", "duck_walk", "t2").await.unwrap());
    }

    #[tokio::test]
    async fn badge_prefix_filter() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_badge("u1", "state_pa").await.unwrap();
        store.insert_badge("u1", "state_oh").await.unwrap();
        store.insert_badge("u1", "unique_trails_3").await.unwrap();
        // The underscore in the prefix is literal, not a LIKE wildcard
        store.insert_badge("u1", "states_3").await.unwrap();

        let states = store.list_badge_ids("u1", Some("state_")).await.unwrap();
        assert_eq!(states.len(), 2);
        assert!(states.iter().all(|id| id.starts_with("state_")));
    }

    #[tokio::test]
    async fn sums_follow_completions_not_distinct_trails() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.upsert_trail("t1", &trail("pa", "Westmoreland", None)).unwrap();
        store.record_completion("u1", &completion("t1", 2026, 5, 1)).unwrap();
        store.record_completion("u1", &completion("t1", 2026, 5, 2)).unwrap();

        // Two hikes of a 5 km trail accumulate 10 km
        assert_eq!(store.total_distance_m("u1").await.unwrap(), 10000.0);
        assert_eq!(store.total_elevation_gain_m("u1").await.unwrap(), 240.0);
    }
}
