//! Ordinal sequence invariant: ordinals equal positions.

use super::Invariant;
use crate::HistoryLog;

/// Invariant: the snapshot at index `i` has ordinal `i`.
///
/// Only the initial snapshot lacks a location.
pub struct OrdinalSequenceInvariant;

impl Invariant<HistoryLog> for OrdinalSequenceInvariant {
    fn holds(history: &HistoryLog) -> bool {
        history.iter().enumerate().all(|(index, state)| {
            state.ordinal() == index && state.location().is_some() == (index > 0)
        })
    }

    fn description() -> &'static str {
        "Snapshot ordinals match their position in the log"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Game;

    #[test]
    fn test_initial_history_holds() {
        assert!(OrdinalSequenceInvariant::holds(&HistoryLog::new(3)));
    }

    #[test]
    fn test_history_after_moves_holds() {
        let game = Game::replay(&[0, 4, 8, 2]);
        assert!(OrdinalSequenceInvariant::holds(game.history()));
    }
}
