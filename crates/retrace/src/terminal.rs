//! Terminal mode guard for the interactive UI.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, instrument};

/// Restores the terminal when dropped.
///
/// Created before any other setup step, so an error anywhere after raw
/// mode is enabled still leaves the alternate screen and turns raw mode
/// back off.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode and switches `out` to the alternate screen.
    #[instrument(skip_all)]
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        Self::setup(out, true)
    }

    /// Switches `out` to the alternate screen without touching raw mode.
    pub fn alternate_screen(out: W) -> io::Result<Self> {
        Self::setup(out, false)
    }

    fn setup(out: W, raw_mode: bool) -> io::Result<Self> {
        let mut guard = Self { out, raw_mode };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!(raw_mode = self.raw_mode, "Restoring terminal");
        if self.raw_mode {
            let _ = disable_raw_mode();
        }
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
    }
}
