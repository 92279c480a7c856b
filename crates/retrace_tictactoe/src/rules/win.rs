//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player, SIDE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Winning lines in evaluation order.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line of three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    /// The player owning the line.
    pub winner: Player,
    /// Cell indices of the line, in line order.
    pub positions: [usize; 3],
}

/// Checks if there is a winner on the board.
///
/// Returns the first line of [`LINES`] whose three cells hold the same
/// player. Boards that are not 3x3 never have a winner.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<WinLine> {
    if board.side() != SIDE {
        return None;
    }

    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a)?;
        match sq {
            Cell::Occupied(winner) if board.get(b) == Some(sq) && board.get(c) == Some(sq) => {
                Some(WinLine {
                    winner,
                    positions: [a, b, c],
                })
            }
            _ => None,
        }
    })
}
