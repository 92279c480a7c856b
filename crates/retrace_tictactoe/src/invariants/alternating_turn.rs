//! Alternating turn invariant: X plays odd moves, O plays even ones.

use super::Invariant;
use crate::{Cell, HistoryLog, Player};

/// Invariant: the mark placed by move `n` belongs to X when `n` is odd
/// and to O when `n` is even.
///
/// The controller derives the next player from index parity, so this only
/// holds while history is changed by truncation and append alone.
pub struct AlternatingTurnInvariant;

impl Invariant<HistoryLog> for AlternatingTurnInvariant {
    fn holds(history: &HistoryLog) -> bool {
        history.iter().skip(1).all(|state| {
            let (Some(location), Some(previous)) = (state.location(), state.ordinal().checked_sub(1))
            else {
                return false;
            };
            let board = state.board();
            let expected = Player::for_index(previous);
            board.get(board.index_of(location)) == Some(Cell::Occupied(expected))
        })
    }

    fn description() -> &'static str {
        "Players alternate starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Game;

    #[test]
    fn test_empty_history_holds() {
        assert!(AlternatingTurnInvariant::holds(&HistoryLog::new(3)));
    }

    #[test]
    fn test_parity_of_every_move() {
        let game = Game::replay(&[4, 0, 8, 2, 6]);
        assert!(AlternatingTurnInvariant::holds(game.history()));
        for state in game.history().iter().skip(1) {
            let location = state.location().expect("move location");
            let cell = state.board().get(state.board().index_of(location));
            let expected = if state.ordinal() % 2 == 1 { Player::X } else { Player::O };
            assert_eq!(cell, Some(Cell::Occupied(expected)));
        }
    }
}
