//! Word slots: horizontal and vertical runs of open cells.

use std::iter::FusedIterator;

use crate::Position;

/// The direction in which a slot is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Direction {
    /// Left to right.
    #[display("across")]
    Across,
    /// Top to bottom.
    #[display("down")]
    Down,
}

impl Direction {
    /// Both directions, across first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the position `offset` cells away from `start` in this direction.
    #[must_use]
    #[inline]
    pub const fn step(self, start: Position, offset: usize) -> Position {
        match self {
            Direction::Across => Position::new(start.row(), start.col() + offset),
            Direction::Down => Position::new(start.row() + offset, start.col()),
        }
    }
}

/// A horizontal or vertical run of cells that receives exactly one word.
///
/// A slot is identified by its start cell, its length and its direction.
/// Equality, hashing and ordering use those four fields; ordering is by
/// `(row, col, direction, length)`.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Direction, Position, Slot};
///
/// let slot = Slot::new(1, 2, 3, Direction::Down);
/// let cells: Vec<_> = slot.cells().collect();
/// assert_eq!(
///     cells,
///     [Position::new(1, 2), Position::new(2, 2), Position::new(3, 2)]
/// );
/// assert_eq!(slot.index_of(Position::new(3, 2)), Some(2));
/// assert_eq!(slot.to_string(), "(1, 2) down : 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{start} {direction} : {length}")]
pub struct Slot {
    start: Position,
    direction: Direction,
    length: usize,
}

impl Slot {
    /// Creates a slot starting at `(row, col)`.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize, length: usize, direction: Direction) -> Self {
        Self {
            start: Position::new(row, col),
            direction,
            length,
        }
    }

    /// Returns the first cell of the slot.
    #[must_use]
    #[inline]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Returns the row of the first cell.
    #[must_use]
    #[inline]
    pub const fn row(&self) -> usize {
        self.start.row()
    }

    /// Returns the column of the first cell.
    #[must_use]
    #[inline]
    pub const fn col(&self) -> usize {
        self.start.col()
    }

    /// Returns the number of cells (and therefore letters) in the slot.
    #[must_use]
    #[inline]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns the reading direction.
    #[must_use]
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the cell holding the `index`-th letter, or `None` past the end.
    #[must_use]
    #[inline]
    pub const fn cell(&self, index: usize) -> Option<Position> {
        if index < self.length {
            Some(self.direction.step(self.start, index))
        } else {
            None
        }
    }

    /// Returns the letter index at which this slot covers `pos`, if it does.
    #[must_use]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        let (fixed, along) = match self.direction {
            Direction::Across => ((pos.row(), self.row()), (pos.col(), self.col())),
            Direction::Down => ((pos.col(), self.col()), (pos.row(), self.row())),
        };
        if fixed.0 != fixed.1 || along.0 < along.1 {
            return None;
        }
        let index = along.0 - along.1;
        (index < self.length).then_some(index)
    }

    /// Returns an iterator over the slot's cells in reading order.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> Cells {
        Cells {
            slot: *self,
            front: 0,
            back: self.length,
        }
    }
}

/// Iterator over the cells of a [`Slot`], in reading order.
#[derive(Debug, Clone)]
pub struct Cells {
    slot: Slot,
    front: usize,
    back: usize,
}

impl Iterator for Cells {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let pos = self.slot.cell(self.front);
        self.front += 1;
        pos
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Cells {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.slot.cell(self.back)
    }
}

impl FusedIterator for Cells {}
impl ExactSizeIterator for Cells {}
