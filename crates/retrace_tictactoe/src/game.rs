//! Game controller: a history log plus a pointer into it.

#[cfg(debug_assertions)]
use crate::invariants::assert_invariants;
use crate::rules::check_winner;
use crate::{BoardState, HistoryError, HistoryLog, Player, SIDE, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Tic-tac-toe game with time-travel history.
///
/// Transitions never mutate a game in place: each returns the next game
/// value, so earlier values stay valid snapshots of the session.
///
/// A deserialized game must point at a snapshot its log contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    history: HistoryLog,
    current: usize,
}

/// Unchecked wire form of [`Game`].
#[derive(Deserialize)]
struct GameRecord {
    history: HistoryLog,
    current: usize,
}

impl TryFrom<GameRecord> for Game {
    type Error = HistoryError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        record.history.get(record.current)?;
        Ok(Self {
            history: record.history,
            current: record.current,
        })
    }
}

impl Game {
    /// Creates a new game on a 3x3 board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_side(SIDE)
    }

    /// Creates a new game on a `side * side` board.
    #[instrument]
    pub fn with_side(side: usize) -> Self {
        Self {
            history: HistoryLog::new(side),
            current: 0,
        }
    }

    /// Plays `cells` in order from a new game, ignoring illegal clicks.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Self {
        cells
            .iter()
            .fold(Self::new(), |game, &cell| game.apply_move(cell))
    }

    /// Returns the full history log.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Returns the index of the displayed snapshot.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the displayed snapshot.
    pub fn current(&self) -> &BoardState {
        // `current` is only ever set to an index the log contains.
        &self.history[self.current]
    }

    /// Player who moves next from the displayed snapshot.
    pub fn next_player(&self) -> Player {
        Player::for_index(self.current)
    }

    /// Phase of the displayed snapshot, recomputed on every call.
    pub fn status(&self) -> Status {
        Status::evaluate(self.current().board(), self.next_player())
    }

    /// Cells of the winning line on the displayed snapshot.
    pub fn winning_positions(&self) -> Option<[usize; 3]> {
        self.status().winning_positions()
    }

    /// Plays the next player's mark at `cell`.
    ///
    /// Clicks on a won board, an occupied cell, or a cell off the board
    /// are ignored and return the game unchanged. Any snapshots after the
    /// displayed one are discarded.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn apply_move(&self, cell: usize) -> Self {
        let board = self.current().board();

        if let Some(line) = check_winner(board) {
            debug!(winner = %line.winner, "Ignoring click on a won board");
            return self.clone();
        }

        let mover = self.next_player();
        let Some(next_board) = board.with_mark(cell, mover) else {
            debug!("Ignoring click on an occupied or missing cell");
            return self.clone();
        };
        let location = board.location_of(cell);

        let mut next = self.clone();
        match next.history.append(self.current, next_board, location) {
            Ok(ordinal) => next.current = ordinal,
            Err(err) => {
                error!(%err, "History pointer out of sync, move dropped");
                return self.clone();
            }
        }

        info!(player = %mover, %location, ordinal = next.current, "Move played");
        #[cfg(debug_assertions)]
        assert_invariants(&next.history);
        next
    }

    /// Moves the pointer to the snapshot at `target`.
    ///
    /// The history itself is untouched. Fails if `target` is not in the log.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn jump_to(&self, target: usize) -> Result<Self, HistoryError> {
        self.history.get(target)?;
        info!(target, "Jumping to snapshot");
        Ok(Self {
            history: self.history.clone(),
            current: target,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
