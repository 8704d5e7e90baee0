//! Error types for the achievement engine

use crate::store::StoreError;

/// Errors surfaced by the reward engine's public entry points.
///
/// Per-evaluator failures never reach the caller; they are logged and the
/// failing evaluator contributes zero candidates. Only failures that make the
/// whole run meaningless (the store itself is unusable, or a quest the caller
/// named does not exist) propagate.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("unknown quest: {0}")]
    UnknownQuest(String),

    #[error("quest {0} has no levels configured")]
    EmptyQuest(String),
}
