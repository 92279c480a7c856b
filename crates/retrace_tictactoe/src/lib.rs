//! Tic-tac-toe with a branching, time-travel move history.
//!
//! The game keeps every board it has shown as an immutable snapshot.
//! Jumping back only moves a pointer; playing a move after a jump drops
//! the abandoned future and appends the new board.
//!
//! # Example
//!
//! ```
//! use retrace_tictactoe::{Game, Player, Status};
//!
//! let game = Game::replay(&[0, 3, 1, 4, 2]);
//! assert_eq!(game.status().winner(), Some(Player::X));
//!
//! let rewound = game.jump_to(2).unwrap().apply_move(6);
//! assert_eq!(rewound.history().len(), 4);
//! assert_eq!(rewound.status(), Status::InProgress { next: Player::O });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod history;
pub mod invariants;
pub mod rules;
mod status;
mod types;
mod view;

pub use error::HistoryError;
pub use game::Game;
pub use history::{BoardState, HistoryLog};
pub use rules::{WinLine, check_winner, is_full};
pub use status::Status;
pub use types::{Board, Cell, Location, Player, SIDE};
pub use view::{HistoryEntry, Session, Snapshot};
