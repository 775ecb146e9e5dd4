//! End-to-end round flow: commit, move, reveal, verify.

use fairmove_core::{
    Commitment, GameEngine, GameError, MoveList, MoveSelector, Outcome, OutcomeTable, RoundResult,
};
use rand::rngs::OsRng;

/// Selector that always picks the same token
struct FixedSelector(&'static str);

impl MoveSelector for FixedSelector {
    fn select<'a>(&mut self, moves: &'a MoveList) -> Result<&'a str, GameError> {
        moves
            .iter()
            .find(|m| *m == self.0)
            .ok_or(GameError::EmptyMoveList)
    }
}

/// Expected outcome for 1-based indices under the table-generation rule,
/// re-derived independently of the table implementation
fn expected_outcome(first: usize, second: usize, n: usize) -> Outcome {
    let half = n / 2;
    if first == second {
        Outcome::Draw
    } else if second >= first + half {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

#[test]
fn full_round_with_forced_computer_move() {
    let moves = MoveList::new(["Rock", "Paper", "Scissors"]).unwrap();
    let n = moves.len();
    let mut engine = GameEngine::with_sources(moves, FixedSelector("Rock"), OsRng);

    // Commitment is published before the user moves, as a 64-hex-char tag
    let commitment = engine.start_round().unwrap();
    let digest = commitment.to_string();
    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));

    let result = engine.submit_move("Scissors").unwrap();
    assert_eq!(result.user_move, "Scissors");
    assert_eq!(result.computer_move, "Rock");

    // Scissors is index 3, Rock is index 1 (1-based); the rule decides
    let expected = expected_outcome(3, 1, n);
    assert_eq!(result.outcome, expected);
    assert_eq!(expected, Outcome::Lose);

    // User-side fairness check: the revealed key reproduces the tag
    assert_eq!(result.commitment, commitment);
    assert_eq!(
        Commitment::new(&result.revealed_key, &result.computer_move),
        commitment
    );
    assert!(result.verify_commitment());
}

#[test]
fn invalid_move_sets_build_no_engine() {
    for tokens in [
        vec!["Rock", "Paper"],
        vec!["Rock", "Paper", "Scissors", "Lizard"],
        vec!["Rock", "Paper", "Rock"],
    ] {
        assert!(MoveList::new(tokens).is_err());
    }
}

#[test]
fn invalid_then_valid_move_in_same_round() {
    let moves = MoveList::new(["Rock", "Paper", "Scissors"]).unwrap();
    let mut engine = GameEngine::new(moves);

    let commitment = engine.start_round().unwrap();
    assert!(matches!(
        engine.submit_move("NotAMove").unwrap_err(),
        GameError::InvalidMove(_)
    ));

    let result = engine.submit_move("Paper").unwrap();
    assert_eq!(result.commitment, commitment);
    assert!(result.verify_commitment());
}

#[test]
fn protocol_order_is_enforced() {
    let moves = MoveList::new(["Rock", "Paper", "Scissors"]).unwrap();
    let mut engine = GameEngine::new(moves);

    assert!(matches!(
        engine.submit_move("Rock").unwrap_err(),
        GameError::RoundNotStarted
    ));

    engine.start_round().unwrap();
    assert!(matches!(
        engine.start_round().unwrap_err(),
        GameError::RoundInProgress
    ));

    engine.submit_move("Rock").unwrap();
    engine.terminate().unwrap();
    assert!(matches!(
        engine.start_round().unwrap_err(),
        GameError::EngineTerminated
    ));
}

#[test]
fn many_rounds_stay_consistent_with_the_table() {
    let tokens = ["Rock", "Spock", "Paper", "Lizard", "Scissors"];
    let moves = MoveList::new(tokens).unwrap();
    let table = OutcomeTable::build(moves.clone());
    let mut engine = GameEngine::new(moves);

    for round in 0..20 {
        let commitment = engine.start_round().unwrap();
        let user_move = tokens[round % tokens.len()];
        let result = engine.submit_move(user_move).unwrap();

        assert_eq!(result.commitment, commitment);
        assert!(result.verify_commitment());
        assert_eq!(
            result.outcome,
            table.resolve(user_move, &result.computer_move).unwrap()
        );
    }
}

#[test]
fn round_result_serializes() {
    let moves = MoveList::new(["Rock", "Paper", "Scissors"]).unwrap();
    let mut engine = GameEngine::with_sources(moves, FixedSelector("Scissors"), OsRng);

    engine.start_round().unwrap();
    let result = engine.submit_move("Rock").unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let deserialized: RoundResult = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized.round_id, result.round_id);
    assert_eq!(deserialized.user_move, result.user_move);
    assert_eq!(deserialized.computer_move, result.computer_move);
    assert_eq!(deserialized.outcome, result.outcome);
    assert!(deserialized.verify_commitment());
}
