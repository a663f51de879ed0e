use crate::{Position, Slot};

/// Errors raised while parsing a grid structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StructureError {
    /// The input contained no rows.
    #[display("structure has no rows")]
    Empty,
}

/// Errors raised while parsing a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum VocabularyError {
    /// A line contained characters other than ASCII letters.
    #[display("invalid word {word:?} on line {line}")]
    InvalidWord {
        /// One-based line number of the offending entry.
        line: usize,
        /// The entry as it appeared in the input (trimmed).
        word: String,
    },
}

/// Errors raised while building a [`SlotCatalog`](crate::SlotCatalog) from an explicit slot list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CatalogError {
    /// A slot has length zero.
    #[display("slot {slot} has zero length")]
    ZeroLength {
        /// The rejected slot.
        slot: Slot,
    },
    /// A slot extends beyond the grid.
    #[display("slot {slot} leaves the grid at {position}")]
    OutOfBounds {
        /// The rejected slot.
        slot: Slot,
        /// The first cell outside the grid.
        position: Position,
    },
    /// A slot covers a blocked cell.
    #[display("slot {slot} covers blocked cell {position}")]
    BlockedCell {
        /// The rejected slot.
        slot: Slot,
        /// The blocked cell.
        position: Position,
    },
    /// The same slot was listed twice.
    #[display("slot {slot} is listed more than once")]
    DuplicateSlot {
        /// The repeated slot.
        slot: Slot,
    },
    /// Two slots share more than one cell.
    #[display("slots {first} and {second} share more than one cell")]
    AmbiguousOverlap {
        /// The earlier of the two slots.
        first: Slot,
        /// The later of the two slots.
        second: Slot,
    },
}
