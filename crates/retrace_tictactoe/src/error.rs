//! Errors raised by the history log.

/// Error raised when the view and the core disagree about the history.
///
/// These are contract violations, never clamped: an index the log does not
/// contain means the caller is out of sync with the game it is driving.
/// The malformed-data variants come from deserializing a saved game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The requested snapshot does not exist.
    #[display("History index {index} is out of range (length {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of snapshots in the log.
        len: usize,
    },
    /// A deserialized board does not hold `side * side` cells.
    #[display("Board of side {side} has {cells} cells")]
    MalformedBoard {
        /// Declared side length.
        side: usize,
        /// Number of cells actually present.
        cells: usize,
    },
    /// A deserialized history log breaks one of its invariants.
    #[display("Invalid history: {reason}")]
    InvalidHistory {
        /// What the log got wrong.
        reason: &'static str,
    },
}
