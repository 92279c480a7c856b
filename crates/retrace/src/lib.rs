//! Terminal front end for retrace.
//!
//! The view layer only: it forwards key presses to a
//! [`retrace_tictactoe::Session`] and renders the snapshot it reads back.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod terminal;
pub mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command};
pub use config::{Config, ConfigError};
pub use terminal::TerminalGuard;
