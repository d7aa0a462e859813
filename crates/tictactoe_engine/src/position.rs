//! Board positions and coordinate validation.

use crate::error::MoveError;
use tracing::instrument;

/// A cell position on the board.
///
/// Callers outside the engine speak in `(row, col)` pairs; those are
/// converted through [`Position::from_coords`], which is the only place
/// bounds are checked. Once a `Position` exists, indexing the board
/// cannot go out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts a `(row, col)` pair into a position.
    ///
    /// Fails with [`MoveError::OutOfRange`] unless both are in `0..=2`.
    #[instrument]
    pub fn from_coords(row: i64, col: i64) -> Result<Self, MoveError> {
        let in_range = |v: i64| (0..3).contains(&v);
        if !in_range(row) || !in_range(col) {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(Self::ALL[(row * 3 + col) as usize])
    }

    /// Converts position to a row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coords_maps_row_major() {
        assert_eq!(Position::from_coords(0, 0), Ok(Position::TopLeft));
        assert_eq!(Position::from_coords(1, 1), Ok(Position::Center));
        assert_eq!(Position::from_coords(2, 0), Ok(Position::BottomLeft));
        assert_eq!(Position::from_coords(2, 2), Ok(Position::BottomRight));
    }

    #[test]
    fn test_from_coords_rejects_out_of_range() {
        for (row, col) in [(3, 0), (0, 3), (-1, 0), (0, -1), (i64::MAX, 1)] {
            assert_eq!(
                Position::from_coords(row, col),
                Err(MoveError::OutOfRange { row, col })
            );
        }
    }

    #[test]
    fn test_row_and_col_round_trip_through_coords() {
        for (index, pos) in Position::ALL.into_iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_coords(pos.row() as i64, pos.col() as i64), Ok(pos));
        }
    }
}
