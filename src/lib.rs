//! Waymark - achievement engine for trail tracking
//!
//! After a user logs a completed trail, the engine determines which badges,
//! tokens, and quest-level changes that completion newly unlocks, persists
//! them exactly once, and returns them for display.
//!
//! The completion row itself is written by the completion-recording flow
//! before the engine runs; the engine only reads completions and trails, and
//! owns the write path for awards.
//!
//! # Usage
//!
//! ```ignore
//! let store = Arc::new(SqliteStore::open(&path)?);
//! let engine = RewardEngine::new(store);
//!
//! // Persist and return newly earned awards
//! let rewards = engine.evaluate(user, trail, &details, Mode::Reward).await?;
//!
//! // Preview everything that currently qualifies, without persisting
//! let preview = engine.evaluate(user, trail, &details, Mode::Detect).await?;
//! ```

pub mod calendar;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod model;
pub mod par;
pub mod store;

pub use engine::{QuestEvent, RewardEngine};
pub use error::EngineError;
pub use model::{
    Badge, CircusStunt, Completion, CompletionDetails, EnvironmentCondition, Mode,
    MovementConstraint, PerceptionWindow, Rewards, Sport, SurfaceRule, Token, TrailAttributes,
    WeightCarry, WeightStyle,
};
pub use store::{SqliteStore, StoreError, TrailStore};
