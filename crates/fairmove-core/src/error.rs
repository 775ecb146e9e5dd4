//! Error taxonomy for the game core.

use thiserror::Error;

/// Move-set validation failures. Fatal at construction time: no game
/// state is built from a list that violates any of these rules.
#[derive(Debug, Error)]
pub enum MoveSetError {
    #[error("at least 3 moves are required, got {0}")]
    TooFew(usize),

    #[error("an odd number of moves is required, got {0}")]
    EvenCount(usize),

    #[error("duplicate move: {0}")]
    Duplicate(String),
}

/// Errors from game operations
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid move set: {0}")]
    InvalidMoveSet(#[from] MoveSetError),

    #[error("entropy source unavailable: {0}")]
    EntropySource(#[from] rand::Error),

    #[error("unknown move: {0}")]
    UnknownMove(String),

    #[error("invalid move: {0}")]
    InvalidMove(String),

    #[error("a round is already in progress")]
    RoundInProgress,

    #[error("no round in progress")]
    RoundNotStarted,

    #[error("engine is terminated")]
    EngineTerminated,

    #[error("move list is empty")]
    EmptyMoveList,
}
