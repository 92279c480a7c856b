//! Interface between the core and whatever renders it.
//!
//! A view forwards user intents (cell click, history jump, sort toggle)
//! into a [`Session`] and renders the [`Snapshot`] it reads back.

use crate::{Cell, Game, HistoryError, Status};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One line of the history list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Move number this entry jumps to.
    ordinal: usize,
    /// Text of the jump button.
    label: String,
    /// Whether this is the snapshot on display.
    is_current: bool,
}

/// Read-only state handed to the view for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells of the displayed board, row-major.
    cells: Vec<Cell>,
    /// Board side length.
    side: usize,
    /// Phase of the displayed board.
    status: Status,
    /// Cells to highlight when the board is won.
    winning_positions: Option<[usize; 3]>,
    /// History list in presentation order.
    history_entries: Vec<HistoryEntry>,
    /// Whether the history list is shown newest first.
    sort_descending: bool,
    /// Index of the displayed snapshot.
    current_index: usize,
}

/// A game plus the presentation state around it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    game: Game,
    sort_descending: bool,
}

impl Session {
    /// Creates a session around a new 3x3 game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session around an existing game.
    pub fn with_game(game: Game, sort_descending: bool) -> Self {
        Self {
            game,
            sort_descending,
        }
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Whether the history list is shown newest first.
    pub fn sort_descending(&self) -> bool {
        self.sort_descending
    }

    /// Handles a click on a board cell.
    #[instrument(skip(self))]
    pub fn on_cell_click(&mut self, index: usize) {
        self.game = self.game.apply_move(index);
    }

    /// Handles a click on a history entry.
    #[instrument(skip(self))]
    pub fn on_history_jump(&mut self, ordinal: usize) -> Result<(), HistoryError> {
        self.game = self.game.jump_to(ordinal)?;
        Ok(())
    }

    /// Flips the presentation order of the history list.
    #[instrument(skip(self))]
    pub fn on_sort_toggle(&mut self) {
        self.sort_descending = !self.sort_descending;
        debug!(sort_descending = self.sort_descending, "History order toggled");
    }

    /// Builds the state the view renders.
    pub fn snapshot(&self) -> Snapshot {
        let current = self.game.current();
        let status = self.game.status();
        let history_entries = self
            .game
            .history()
            .ordered_view(!self.sort_descending)
            .into_iter()
            .map(|state| HistoryEntry {
                ordinal: state.ordinal(),
                label: state.label(),
                is_current: state.ordinal() == self.game.current_index(),
            })
            .collect();

        Snapshot {
            cells: current.board().cells().to_vec(),
            side: current.board().side(),
            status,
            winning_positions: status.winning_positions(),
            history_entries,
            sort_descending: self.sort_descending,
            current_index: self.game.current_index(),
        }
    }
}
