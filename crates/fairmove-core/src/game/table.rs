//! Outcome relation over a move list.

use super::MoveList;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Round outcome from the first player's perspective
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Win/lose/draw relation between every ordered pair of moves.
///
/// Generation rule, with 1-based indices i, j over the move order and
/// half = N / 2 (integer division): the pair (i, j) draws when i == j,
/// wins for i when j >= i + half, and loses for i otherwise. The
/// comparison is on raw indices with no wraparound, so the relation is
/// skew-symmetric only when the caller supplies moves in the cyclic
/// order where each move beats the following half-N moves; the builder
/// does not verify or reorder the list.
#[derive(Clone, Debug)]
pub struct OutcomeTable {
    moves: MoveList,
    cells: Vec<Vec<Outcome>>,
}

impl OutcomeTable {
    /// Build the relation for a validated move list
    pub fn build(moves: MoveList) -> Self {
        let n = moves.len();
        let half = n / 2;
        let mut cells = vec![vec![Outcome::Draw; n]; n];

        for i in 1..=n {
            for j in 1..=n {
                cells[i - 1][j - 1] = if i == j {
                    Outcome::Draw
                } else if j >= i + half {
                    Outcome::Win
                } else {
                    Outcome::Lose
                };
            }
        }

        Self { moves, cells }
    }

    /// The move list this table was built from
    pub fn moves(&self) -> &MoveList {
        &self.moves
    }

    /// Outcome for `first` against `second`
    pub fn resolve(&self, first: &str, second: &str) -> Result<Outcome, GameError> {
        let i = self
            .moves
            .position(first)
            .ok_or_else(|| GameError::UnknownMove(first.to_string()))?;
        let j = self
            .moves
            .position(second)
            .ok_or_else(|| GameError::UnknownMove(second.to_string()))?;

        Ok(self.cells[i][j])
    }

    /// Rendered (N+1)x(N+1) grid with move labels in row and column 0,
    /// for help display
    pub fn grid(&self) -> Vec<Vec<String>> {
        let n = self.moves.len();
        let mut rows = Vec::with_capacity(n + 1);

        let mut header = Vec::with_capacity(n + 1);
        header.push(String::new());
        header.extend(self.moves.iter().map(String::from));
        rows.push(header);

        for (i, token) in self.moves.iter().enumerate() {
            let mut row = Vec::with_capacity(n + 1);
            row.push(token.to_string());
            row.extend(self.cells[i].iter().map(|o| o.as_str().to_string()));
            rows.push(row);
        }

        rows
    }
}
