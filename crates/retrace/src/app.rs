//! Application state and key handling.

use crate::config::Config;
use crate::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use retrace_tictactoe::{Game, Session, Snapshot};
use tracing::{debug, instrument, warn};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move through the history list.
    History,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: usize,
    focus: Focus,
    selected_ordinal: usize,
    message: Option<String>,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &Config) -> Self {
        Self {
            session: Session::with_game(Game::with_side(*config.side()), *config.sort_descending()),
            cursor: 0,
            focus: Focus::Board,
            selected_ordinal: 0,
            message: None,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Board cell under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Ordinal highlighted in the history list.
    pub fn selected_ordinal(&self) -> usize {
        self.selected_ordinal
    }

    /// Last error shown to the user, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handles one key press. Returns `false` when the app should quit.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                debug!(focus = ?self.focus, "Focus changed");
            }
            KeyCode::Char('s') => self.session.on_sort_toggle(),
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
        true
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        if let Some(cell) = digit_cell(key) {
            self.cursor = cell;
            self.click(cell);
            return;
        }
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor),
            code => {
                let side = self.session.game().current().board().side();
                self.cursor = move_cursor(self.cursor, side, code);
            }
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let snapshot = self.session.snapshot();
        let ordinals: Vec<usize> = snapshot
            .history_entries()
            .iter()
            .map(|entry| *entry.ordinal())
            .collect();
        let position = ordinals
            .iter()
            .position(|&ordinal| ordinal == self.selected_ordinal)
            .unwrap_or(0);

        match key {
            KeyCode::Up if position > 0 => self.selected_ordinal = ordinals[position - 1],
            KeyCode::Down if position + 1 < ordinals.len() => {
                self.selected_ordinal = ordinals[position + 1]
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected_ordinal),
            _ => {}
        }
    }

    fn click(&mut self, cell: usize) {
        self.message = None;
        self.session.on_cell_click(cell);
        self.selected_ordinal = self.session.game().current_index();
    }

    fn jump(&mut self, ordinal: usize) {
        match self.session.on_history_jump(ordinal) {
            Ok(()) => self.message = None,
            Err(err) => {
                warn!(%err, "Rejected history jump");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Builds the snapshot to render.
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }
}
