//! Fairmove Core Library
//!
//! This crate provides the fair-commitment protocol, the algorithmic
//! outcome relation, and the round engine for a provably-fair N-move
//! generalization of rock-paper-scissors:
//! - SecretKey and Commitment for the commit-reveal scheme
//! - MoveList and OutcomeTable for the win/lose/draw relation
//! - GameEngine for the commit -> move -> reveal round protocol

pub mod crypto;
pub mod engine;
pub mod error;
pub mod game;

pub use crypto::{Commitment, SecretKey};
pub use engine::{GameEngine, RoundId, RoundResult};
pub use error::{GameError, MoveSetError};
pub use game::{MoveList, MoveSelector, Outcome, OutcomeTable, RandomSelector};
