//! Monotonic board invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{Cell, HistoryLog};

/// Invariant: every snapshot equals its predecessor plus one mark.
///
/// Marks are never removed or overwritten, so the occupied count of a
/// snapshot equals its ordinal.
pub struct MonotonicBoardInvariant;

impl Invariant<HistoryLog> for MonotonicBoardInvariant {
    fn holds(history: &HistoryLog) -> bool {
        let states: Vec<_> = history.iter().collect();
        if states.first().is_some_and(|s| s.board().occupied() != 0) {
            return false;
        }

        states.windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let changed: Vec<usize> = before
                .cells()
                .iter()
                .zip(after.cells())
                .enumerate()
                .filter(|(_, (b, a))| b != a)
                .map(|(pos, _)| pos)
                .collect();

            match changed.as_slice() {
                [pos] => before.get(*pos) == Some(Cell::Empty),
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Location, Player};

    #[test]
    fn test_moves_hold() {
        let game = crate::Game::replay(&[0, 1, 2, 3]);
        assert!(MonotonicBoardInvariant::holds(game.history()));
    }

    #[test]
    fn test_double_mark_violates() {
        let mut history = HistoryLog::new(3);
        let board = Board::new()
            .with_mark(0, Player::X)
            .and_then(|b| b.with_mark(1, Player::X))
            .expect("free cells");
        history.append(0, board, Location { col: 0, row: 0 }).expect("in range");
        assert!(!MonotonicBoardInvariant::holds(&history));
    }
}
