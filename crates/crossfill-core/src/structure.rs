//! Grid layout of open and blocked cells.

use std::{fmt, str::FromStr};

use crate::{Direction, Position, Slot, StructureError};

/// Character marking an open cell in the text format.
pub const OPEN_CELL: char = '_';

/// The layout of a crossword grid.
///
/// Every cell is either open (receives a letter) or blocked.
///
/// # Text format
///
/// One line per row. `_` marks an open cell; any other character marks a
/// blocked cell. Rows shorter than the widest row are padded with blocked
/// cells, and trailing blank lines are ignored.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Position, Structure};
///
/// let structure: Structure = "#___\n#_#\n".parse()?;
/// assert_eq!(structure.width(), 4);
/// assert_eq!(structure.height(), 2);
/// assert!(structure.is_open(Position::new(0, 1)));
/// assert!(!structure.is_open(Position::new(1, 3))); // padded
/// # Ok::<(), crossfill_core::StructureError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    width: usize,
    height: usize,
    open: Vec<bool>,
}

impl Structure {
    /// Builds a structure from rows of open (`true`) / blocked (`false`) flags.
    ///
    /// Short rows are padded with blocked cells.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::Empty`] if `rows` is empty.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, StructureError>
    where
        R: AsRef<[bool]>,
    {
        if rows.is_empty() {
            return Err(StructureError::Empty);
        }
        let height = rows.len();
        let width = rows.iter().map(|row| row.as_ref().len()).max().unwrap_or(0);
        let mut open = vec![false; width * height];
        for (row, cells) in rows.iter().enumerate() {
            for (col, &is_open) in cells.as_ref().iter().enumerate() {
                open[row * width + col] = is_open;
            }
        }
        Ok(Self {
            width,
            height,
            open,
        })
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.height && pos.col() < self.width
    }

    /// Returns `true` if `pos` is an open cell. Cells outside the grid are not open.
    #[must_use]
    #[inline]
    pub fn is_open(&self, pos: Position) -> bool {
        self.contains(pos) && self.open[pos.row() * self.width + pos.col()]
    }

    /// Returns every position of the grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Position::new(row, col)))
    }

    /// Returns the number of open cells.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|&&open| open).count()
    }

    /// Extracts every slot of the grid.
    ///
    /// A slot is a maximal horizontal or vertical run of at least two open
    /// cells. The result is sorted, so slot order only depends on the layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossfill_core::{Direction, Slot, Structure};
    ///
    /// let structure: Structure = "___\n_##".parse()?;
    /// assert_eq!(structure.slots(), [
    ///     Slot::new(0, 0, 3, Direction::Across),
    ///     Slot::new(0, 0, 2, Direction::Down),
    /// ]);
    /// # Ok::<(), crossfill_core::StructureError>(())
    /// ```
    #[must_use]
    pub fn slots(&self) -> Vec<Slot> {
        let mut slots = Vec::new();
        for start in self.positions() {
            if !self.is_open(start) {
                continue;
            }
            for direction in Direction::ALL {
                if self.continues_from_before(start, direction) {
                    continue;
                }
                let length = (0..)
                    .take_while(|&offset| self.is_open(direction.step(start, offset)))
                    .count();
                if length > 1 {
                    slots.push(Slot::new(start.row(), start.col(), length, direction));
                }
            }
        }
        slots.sort_unstable();
        slots
    }

    fn continues_from_before(&self, pos: Position, direction: Direction) -> bool {
        let before = match direction {
            Direction::Across => pos.col().checked_sub(1).map(|col| Position::new(pos.row(), col)),
            Direction::Down => pos.row().checked_sub(1).map(|row| Position::new(row, pos.col())),
        };
        before.is_some_and(|before| self.is_open(before))
    }
}

impl FromStr for Structure {
    type Err = StructureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<bool>> = s
            .lines()
            .map(|line| line.chars().map(|c| c == OPEN_CELL).collect())
            .collect();
        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }
        Self::from_rows(&rows)
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let c = if self.is_open(Position::new(row, col)) {
                    OPEN_CELL
                } else {
                    '#'
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
