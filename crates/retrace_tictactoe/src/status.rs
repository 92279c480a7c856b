//! Derived game phase.

use crate::rules::{WinLine, check_winner, is_full};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};

/// Phase of the game at one snapshot.
///
/// Always derived from a board, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Game is ongoing.
    InProgress {
        /// Player to move next.
        next: Player,
    },
    /// A player completed a line.
    Won(WinLine),
    /// Board is full without a winner.
    Draw,
}

impl Status {
    /// Evaluates a board: a winner first, then a full board, else in progress.
    pub fn evaluate(board: &Board, next: Player) -> Self {
        if let Some(line) = check_winner(board) {
            Status::Won(line)
        } else if is_full(board) {
            Status::Draw
        } else {
            Status::InProgress { next }
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Won(line) => Some(line.winner),
            _ => None,
        }
    }

    /// Returns the cells of the winning line, if any.
    pub fn winning_positions(&self) -> Option<[usize; 3]> {
        match self {
            Status::Won(line) => Some(line.positions),
            _ => None,
        }
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::InProgress { .. })
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::InProgress { next } => write!(f, "Next player: {}", next),
            Status::Won(line) => write!(f, "Winner: {}", line.winner),
            Status::Draw => write!(f, "Draw"),
        }
    }
}
