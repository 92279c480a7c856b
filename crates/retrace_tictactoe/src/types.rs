//! Core domain types for tic-tac-toe.

use crate::HistoryError;
use serde::{Deserialize, Serialize};

/// Side length of the only board shape the win rules understand.
pub const SIDE: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the player who moves from the snapshot at `index`.
    ///
    /// X moves from every even index, O from every odd one.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Symbol shown for this cell, empty for an empty cell.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::Occupied(Player::X) => "X",
            Cell::Occupied(Player::O) => "O",
        }
    }
}

/// Where a move was played.
///
/// `col` is the quotient and `row` the remainder of the cell index divided
/// by the board side, so cell 5 on a 3x3 board is `(1, 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({col}, {row})")]
pub struct Location {
    /// Cell index divided by the side.
    pub col: usize,
    /// Cell index modulo the side.
    pub row: usize,
}

/// Square board stored in row-major order.
///
/// Deserialization rejects a cell count other than `side * side`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord")]
pub struct Board {
    side: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct BoardRecord {
    side: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardRecord> for Board {
    type Error = HistoryError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        if record.cells.len() != record.side * record.side {
            return Err(HistoryError::MalformedBoard {
                side: record.side,
                cells: record.cells.len(),
            });
        }
        Ok(Self {
            side: record.side,
            cells: record.cells,
        })
    }
}

impl Board {
    /// Creates a new empty 3x3 board.
    pub fn new() -> Self {
        Self::with_side(SIDE)
    }

    /// Creates an empty board of `side * side` cells.
    pub fn with_side(side: usize) -> Self {
        Self {
            side,
            cells: vec![Cell::Empty; side * side],
        }
    }

    /// Returns the side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Gets the cell at the given index.
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Checks if a cell exists and is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Returns a copy of this board with `player` placed at `pos`.
    ///
    /// `None` if the cell is off the board or already occupied.
    pub fn with_mark(&self, pos: usize, player: Player) -> Option<Board> {
        if !self.is_empty(pos) {
            return None;
        }
        let mut next = self.clone();
        next.cells[pos] = Cell::Occupied(player);
        Some(next)
    }

    /// Location of a cell index on this board.
    pub fn location_of(&self, pos: usize) -> Location {
        Location {
            col: pos / self.side,
            row: pos % self.side,
        }
    }

    /// Cell index of a location on this board.
    pub fn index_of(&self, location: Location) -> usize {
        location.col * self.side + location.row
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for line in 0..self.side {
            for offset in 0..self.side {
                let pos = line * self.side + offset;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    occupied => occupied.symbol().to_string(),
                };
                result.push_str(&symbol);
                if offset + 1 < self.side {
                    result.push('|');
                }
            }
            if line + 1 < self.side {
                result.push('\n');
                result.push_str(&vec!["-"; self.side].join("+"));
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_has_side_squared_cells() {
        let board = Board::new();
        assert_eq!(board.cells().len(), 9);
        assert!(board.cells().iter().all(|c| *c == Cell::Empty));
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, Player::X).expect("empty cell");
        assert_eq!(board.get(4), Some(Cell::Empty));
        assert_eq!(next.get(4), Some(Cell::Occupied(Player::X)));
    }

    #[test]
    fn test_with_mark_rejects_occupied_and_off_board() {
        let board = Board::new().with_mark(0, Player::X).expect("empty cell");
        assert!(board.with_mark(0, Player::O).is_none());
        assert!(board.with_mark(9, Player::O).is_none());
    }

    #[test]
    fn test_location_uses_quotient_then_remainder() {
        let board = Board::new();
        assert_eq!(board.location_of(5), Location { col: 1, row: 2 });
        assert_eq!(board.location_of(6), Location { col: 2, row: 0 });
        assert_eq!(board.index_of(Location { col: 1, row: 2 }), 5);
    }

    #[test]
    fn test_display() {
        let board = Board::new().with_mark(0, Player::X).expect("empty cell");
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_board_deserialize_rejects_wrong_cell_count() {
        let json = r#"{"side":3,"cells":["Empty","Empty"]}"#;
        let err = serde_json::from_str::<Board>(json).unwrap_err();
        assert!(err.to_string().contains("Board of side 3 has 2 cells"));

        let board = Board::new().with_mark(4, Player::O).expect("empty cell");
        let json = serde_json::to_string(&board).expect("serialize");
        assert_eq!(serde_json::from_str::<Board>(&json).expect("valid"), board);
    }

    #[test]
    fn test_player_for_index_alternates() {
        assert_eq!(Player::for_index(0), Player::X);
        assert_eq!(Player::for_index(1), Player::O);
        assert_eq!(Player::for_index(4), Player::X);
    }
}
