//! Error types surfaced by the runtime API.
//!
//! Wraps failures from the decision feed and the battle rules so the client
//! can bubble them up with consistent context.
use thiserror::Error;

use battle_core::BattleError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("decision feed ran out of input")]
    FeedExhausted,

    #[error("failed to read decision input: {0}")]
    Input(String),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error("failed to load content: {0}")]
    Content(String),
}
