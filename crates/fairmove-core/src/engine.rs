//! Round orchestration engine.
//!
//! One engine owns an immutable move list and outcome table and plays
//! independent commit -> move -> reveal rounds: `start_round` commits
//! the computer's move under a fresh secret key and publishes the
//! commitment, `submit_move` resolves the round against the user's move
//! and reveals the key so the commitment can be checked.

use crate::crypto::{Commitment, SecretKey};
use crate::error::GameError;
use crate::game::{MoveList, MoveSelector, Outcome, OutcomeTable, RandomSelector};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique round identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    /// Create a new random round ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundId({})", self.0)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything revealed when a round resolves
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_id: RoundId,
    pub user_move: String,
    pub computer_move: String,
    /// Outcome from the user's perspective
    pub outcome: Outcome,
    /// Tag that was published before the user moved
    pub commitment: Commitment,
    /// Key for recomputing the commitment tag
    pub revealed_key: SecretKey,
}

impl RoundResult {
    /// User-side fairness check: recompute the tag over the revealed
    /// key and computer move and compare with the published commitment
    pub fn verify_commitment(&self) -> bool {
        self.commitment
            .verify(&self.revealed_key, &self.computer_move)
    }
}

/// Committed state of the round in flight. The key and computer move
/// are moved out into the RoundResult on resolution and never reused.
struct PendingRound {
    round_id: RoundId,
    key: SecretKey,
    computer_move: String,
    commitment: Commitment,
}

enum Phase {
    Idle,
    Committed(PendingRound),
    Terminated,
}

/// Per-session game engine.
///
/// Processes one round at a time: `start_round` must resolve via
/// `submit_move` before the next round can begin. Not safe for
/// concurrent calls; a concurrent adaptation must own one engine per
/// session.
pub struct GameEngine<S = RandomSelector, R = OsRng> {
    table: OutcomeTable,
    selector: S,
    rng: R,
    phase: Phase,
}

impl GameEngine {
    /// Engine with the default random sources
    pub fn new(moves: MoveList) -> Self {
        Self::with_sources(moves, RandomSelector, OsRng)
    }
}

impl<S, R> GameEngine<S, R>
where
    S: MoveSelector,
    R: RngCore + CryptoRng,
{
    /// Engine with injected move-selection and entropy sources
    pub fn with_sources(moves: MoveList, selector: S, rng: R) -> Self {
        Self {
            table: OutcomeTable::build(moves),
            selector,
            rng,
            phase: Phase::Idle,
        }
    }

    /// The move list this engine plays over
    pub fn moves(&self) -> &MoveList {
        self.table.moves()
    }

    /// The outcome relation, for help display
    pub fn outcome_table(&self) -> &OutcomeTable {
        &self.table
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.phase, Phase::Terminated)
    }

    /// Begin a round: generate a fresh key, select and privately store
    /// the computer's move, and return the commitment. The move and key
    /// stay hidden until the round resolves.
    pub fn start_round(&mut self) -> Result<Commitment, GameError> {
        match self.phase {
            Phase::Terminated => return Err(GameError::EngineTerminated),
            Phase::Committed(_) => return Err(GameError::RoundInProgress),
            Phase::Idle => {}
        }

        let key = SecretKey::generate(&mut self.rng)?;
        let computer_move = self.selector.select(self.table.moves())?.to_string();
        let commitment = Commitment::new(&key, &computer_move);

        self.phase = Phase::Committed(PendingRound {
            round_id: RoundId::new(),
            key,
            computer_move,
            commitment,
        });

        Ok(commitment)
    }

    /// Resolve the round in flight against the user's move, revealing
    /// the computer move and key. An invalid move leaves the round
    /// unchanged so the caller can retry.
    pub fn submit_move(&mut self, user_move: &str) -> Result<RoundResult, GameError> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Terminated => {
                self.phase = Phase::Terminated;
                Err(GameError::EngineTerminated)
            }
            Phase::Idle => Err(GameError::RoundNotStarted),
            Phase::Committed(pending) => {
                if !self.table.moves().contains(user_move) {
                    let err = GameError::InvalidMove(user_move.to_string());
                    self.phase = Phase::Committed(pending);
                    return Err(err);
                }

                let outcome = self.table.resolve(user_move, &pending.computer_move)?;

                Ok(RoundResult {
                    round_id: pending.round_id,
                    user_move: user_move.to_string(),
                    computer_move: pending.computer_move,
                    outcome,
                    commitment: pending.commitment,
                    revealed_key: pending.key,
                })
            }
        }
    }

    /// Stop accepting rounds. Every later call on the engine fails with
    /// `EngineTerminated`.
    pub fn terminate(&mut self) -> Result<(), GameError> {
        if self.is_terminated() {
            return Err(GameError::EngineTerminated);
        }
        self.phase = Phase::Terminated;
        Ok(())
    }
}
