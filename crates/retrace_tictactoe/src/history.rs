//! Ordered log of board snapshots with branching appends.

use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::{Board, HistoryError, Location};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One immutable snapshot of the board.
///
/// The initial snapshot has ordinal 0 and no location; every later
/// snapshot records where its move was played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    board: Board,
    location: Option<Location>,
    ordinal: usize,
}

impl BoardState {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns where the move leading to this snapshot was played.
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// Returns the move number of this snapshot.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Label used by the history list.
    pub fn label(&self) -> String {
        match self.location {
            Some(location) if self.ordinal > 0 => {
                format!("Go to move #{} {}", self.ordinal, location)
            }
            _ => "Go to game start".to_string(),
        }
    }
}

/// Snapshots in canonical order: the snapshot at index `i` has ordinal `i`.
///
/// Deserialization rejects logs the controller could never have built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRecord")]
pub struct HistoryLog {
    states: Vec<BoardState>,
}

/// Unchecked wire form of [`HistoryLog`].
#[derive(Deserialize)]
struct HistoryRecord {
    states: Vec<BoardState>,
}

impl TryFrom<HistoryRecord> for HistoryLog {
    type Error = HistoryError;

    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        let Some(first) = record.states.first() else {
            return Err(HistoryError::InvalidHistory {
                reason: "log has no initial snapshot",
            });
        };
        let side = first.board.side();
        if record.states.iter().any(|s| s.board.side() != side) {
            return Err(HistoryError::InvalidHistory {
                reason: "snapshots disagree on the board side",
            });
        }

        let log = Self {
            states: record.states,
        };
        if let Err(violations) = HistoryInvariants::check_all(&log) {
            debug!(?violations, "Rejecting deserialized history");
            return Err(HistoryError::InvalidHistory {
                reason: "snapshots do not follow the rules of play",
            });
        }
        Ok(log)
    }
}

impl HistoryLog {
    /// Creates a log holding only the empty board of the given side.
    pub fn new(side: usize) -> Self {
        Self {
            states: vec![BoardState {
                board: Board::with_side(side),
                location: None,
                ordinal: 0,
            }],
        }
    }

    /// Number of snapshots. Never zero.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: the initial snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Snapshots in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, BoardState> {
        self.states.iter()
    }

    /// Returns the snapshot at `index`.
    pub fn get(&self, index: usize) -> Result<&BoardState, HistoryError> {
        self.states.get(index).ok_or(HistoryError::IndexOutOfRange {
            index,
            len: self.states.len(),
        })
    }

    /// Appends a snapshot after `current_index`, dropping everything past it.
    ///
    /// Returns the ordinal of the new snapshot, `current_index + 1`.
    #[instrument(skip(self, board), fields(len = self.states.len()))]
    pub fn append(
        &mut self,
        current_index: usize,
        board: Board,
        location: Location,
    ) -> Result<usize, HistoryError> {
        self.get(current_index)?;

        let discarded = self.states.len() - (current_index + 1);
        if discarded > 0 {
            debug!(discarded, "Branching: dropping future snapshots");
        }
        self.states.truncate(current_index + 1);

        let ordinal = current_index + 1;
        self.states.push(BoardState {
            board,
            location: Some(location),
            ordinal,
        });
        Ok(ordinal)
    }

    /// Snapshots sorted by ordinal, ascending or descending.
    ///
    /// Presentation only: stored ordinals never change.
    pub fn ordered_view(&self, ascending: bool) -> Vec<&BoardState> {
        let mut view: Vec<&BoardState> = self.states.iter().collect();
        if ascending {
            view.sort_by_key(|state| state.ordinal);
        } else {
            view.sort_by(|a, b| b.ordinal.cmp(&a.ordinal));
        }
        view
    }
}

impl std::ops::Index<usize> for HistoryLog {
    type Output = BoardState;

    fn index(&self, index: usize) -> &BoardState {
        &self.states[index]
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(crate::SIDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn mark(log: &HistoryLog, after: usize, pos: usize, player: Player) -> (Board, Location) {
        let board = log.get(after).expect("in range").board();
        (
            board.with_mark(pos, player).expect("free cell"),
            board.location_of(pos),
        )
    }

    #[test]
    fn test_new_log_holds_initial_state() {
        let log = HistoryLog::new(3);
        assert_eq!(log.len(), 1);
        let initial = log.get(0).expect("initial state");
        assert_eq!(initial.ordinal(), 0);
        assert_eq!(initial.location(), None);
        assert_eq!(initial.label(), "Go to game start");
    }

    #[test]
    fn test_append_assigns_next_ordinal() {
        let mut log = HistoryLog::new(3);
        let (board, location) = mark(&log, 0, 5, Player::X);
        assert_eq!(log.append(0, board, location), Ok(1));
        let state = log.get(1).expect("appended");
        assert_eq!(state.location(), Some(Location { col: 1, row: 2 }));
        assert_eq!(state.label(), "Go to move #1 (1, 2)");
    }

    #[test]
    fn test_append_truncates_future() {
        let mut log = HistoryLog::new(3);
        for (after, pos) in [(0, 0), (1, 1), (2, 2)] {
            let (board, location) = mark(&log, after, pos, Player::for_index(after));
            log.append(after, board, location).expect("in range");
        }
        assert_eq!(log.len(), 4);

        let (board, location) = mark(&log, 1, 8, Player::O);
        assert_eq!(log.append(1, board, location), Ok(2));
        assert_eq!(log.len(), 3);
        assert!(log.iter().all(|s| s.ordinal() <= 2));
        assert_eq!(log.get(2).expect("branch").location(), Some(Location { col: 2, row: 2 }));
    }

    #[test]
    fn test_deserialize_rejects_empty_log() {
        let err = serde_json::from_str::<HistoryLog>(r#"{"states":[]}"#).unwrap_err();
        assert!(err.to_string().contains("log has no initial snapshot"));
    }

    #[test]
    fn test_deserialize_rejects_skipped_ordinal() {
        let mut log = HistoryLog::new(3);
        let (board, location) = mark(&log, 0, 4, Player::X);
        log.append(0, board, location).expect("in range");

        let mut value = serde_json::to_value(&log).expect("serialize");
        value["states"][1]["ordinal"] = serde_json::json!(2);
        let err = serde_json::from_value::<HistoryLog>(value).unwrap_err();
        assert!(err.to_string().contains("rules of play"));
    }

    #[test]
    fn test_deserialize_accepts_played_log() {
        let mut log = HistoryLog::new(3);
        let (board, location) = mark(&log, 0, 4, Player::X);
        log.append(0, board, location).expect("in range");

        let json = serde_json::to_string(&log).expect("serialize");
        assert_eq!(serde_json::from_str::<HistoryLog>(&json).expect("valid"), log);
    }

    #[test]
    fn test_get_out_of_range() {
        let log = HistoryLog::new(3);
        assert_eq!(
            log.get(1),
            Err(HistoryError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_append_after_missing_index_leaves_log_alone() {
        let mut log = HistoryLog::new(3);
        let before = log.clone();
        let result = log.append(3, Board::new(), Location { col: 0, row: 0 });
        assert_eq!(result, Err(HistoryError::IndexOutOfRange { index: 3, len: 1 }));
        assert_eq!(log, before);
    }

    #[test]
    fn test_ordered_view_both_directions() {
        let mut log = HistoryLog::new(3);
        for (after, pos) in [(0, 4), (1, 0)] {
            let (board, location) = mark(&log, after, pos, Player::for_index(after));
            log.append(after, board, location).expect("in range");
        }
        let ascending: Vec<usize> = log.ordered_view(true).iter().map(|s| s.ordinal()).collect();
        let descending: Vec<usize> = log.ordered_view(false).iter().map(|s| s.ordinal()).collect();
        assert_eq!(ascending, vec![0, 1, 2]);
        assert_eq!(descending, vec![2, 1, 0]);
        assert_eq!(log.get(2).expect("in range").ordinal(), 2);
    }
}
