//! Move validation errors.

/// Error returned when a move is rejected.
///
/// The display strings are the messages reported to HTTP clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// A winner was already found or the board is full.
    #[display("Game has already ended.")]
    GameEnded,

    /// The target cell already holds a mark.
    #[display("Cell already taken.")]
    CellOccupied,

    /// Row or column lies outside `0..=2`.
    #[display("Row and column must be between 0 and 2.")]
    OutOfRange {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },
}
