//! Grid cell coordinates.

/// A zero-based cell coordinate, with row 0 at the top of the grid.
///
/// Positions are ordered row-major, which is also the order in which
/// [`Structure::positions`](crate::Structure::positions) visits cells.
///
/// # Examples
///
/// ```
/// use crossfill_core::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 5);
/// assert_eq!(pos.to_string(), "(2, 5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and column index.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }
}
