//! Logical board coordinates.

use crate::config::GRID_SIZE;
use crate::error::BoardError;

/// A logical (column, row) square on the playing grid.
///
/// Immutable value type, validated at construction to lie within the
/// 8x8 grid. Column 0 / row 0 is the square nearest the calibrated origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardCoordinate {
    col: u8,
    row: u8,
}

impl BoardCoordinate {
    /// Create a coordinate, validating it against the grid.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidCoordinate` if either component is
    /// outside `0..8`.
    pub const fn new(col: u8, row: u8) -> Result<Self, BoardError> {
        if col >= GRID_SIZE || row >= GRID_SIZE {
            return Err(BoardError::InvalidCoordinate { col, row });
        }
        Ok(Self { col, row })
    }

    /// Column index (axis A direction).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row index (axis B direction).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }
}
