use thiserror::Error;

use crate::training_engine::models::{Position, Scenario};

/// Errors surfaced by the training engine.
///
/// Only `InsufficientCards` and `InvalidHandInput` ever reach an integrating
/// layer during normal play. `UnknownPolicyKey` is recovered inside the
/// resolver, and the parse/config variants only fire while loading input.
#[derive(Debug, Error)]
pub enum TrainerError {
    #[error("insufficient cards: requested {requested}, {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },

    #[error("no policy entry for {position:?} / {scenario:?}")]
    UnknownPolicyKey { position: Position, scenario: Scenario },

    #[error("invalid hand input: {0}")]
    InvalidHandInput(String),

    #[error("invalid card: {0}")]
    InvalidCard(String),

    #[error("invalid range notation: {0}")]
    InvalidRange(String),

    #[error("no policy entry matches the configured positions and scenarios")]
    EmptyDrillPool,

    #[error("no drill in progress")]
    NoActiveDrill,

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrainerError>;
