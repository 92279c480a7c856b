//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold for every history the
//! controller produces. They are testable independently and are asserted
//! after each transition in debug builds.

pub mod alternating_turn;
pub mod monotonic_board;
pub mod ordinal_sequence;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use ordinal_sequence::OrdinalSequenceInvariant;

#[cfg(debug_assertions)]
use crate::HistoryLog;
#[cfg(debug_assertions)]
use tracing::error;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose without boxing.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    OrdinalSequenceInvariant,
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
);

/// Asserts every history invariant.
///
/// Compiled only into debug builds; release builds skip the check entirely.
#[cfg(debug_assertions)]
pub fn assert_invariants(history: &HistoryLog) {
    if let Err(violations) = HistoryInvariants::check_all(history) {
        for violation in &violations {
            error!(%violation, "History invariant violated");
        }
        debug_assert!(violations.is_empty(), "{violations:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Game, HistoryLog, Location, Player};

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        assert!(HistoryInvariants::check_all(&HistoryLog::new(3)).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let game = Game::replay(&[0, 3, 1, 4]).jump_to(1).expect("in range").apply_move(8);
        assert!(HistoryInvariants::check_all(game.history()).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut history = HistoryLog::new(3);
        // O placed where X should have moved first.
        let board = Board::new().with_mark(4, Player::O).expect("free cell");
        history.append(0, board, Location { col: 1, row: 1 }).expect("in range");

        let violations = HistoryInvariants::check_all(&history).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            AlternatingTurnInvariant::description()
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Players alternate starting with X")]
    fn test_assert_invariants_panics_in_debug_builds() {
        let mut history = HistoryLog::new(3);
        let board = Board::new().with_mark(4, Player::O).expect("free cell");
        history.append(0, board, Location { col: 1, row: 1 }).expect("in range");
        assert_invariants(&history);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (OrdinalSequenceInvariant, MonotonicBoardInvariant);
        assert!(TwoInvariants::check_all(Game::replay(&[4, 0]).history()).is_ok());
    }
}
