//! Core data structures for crossword filling.
//!
//! This crate describes *what* has to be filled: the grid, its slots, the
//! vocabulary of candidate words, and the overlap relation between slots.
//! Solving lives in `crossfill-solver`; rendering and file handling live in
//! `crossfill-app`.
//!
//! # Overview
//!
//! 1. **Grid geometry**
//!    - [`position`]: zero-based `(row, col)` cell coordinates
//!    - [`slot`]: horizontal and vertical word slots
//!    - [`structure`]: the open/blocked cell layout parsed from text
//!
//! 2. **Words**
//!    - [`vocabulary`]: validated, upper-cased, de-duplicated word lists
//!
//! 3. **Catalog**
//!    - [`catalog`]: slots, vocabulary and the precomputed overlap relation,
//!      addressed by dense [`SlotId`]s
//!
//! # Examples
//!
//! ```
//! use crossfill_core::{Direction, SlotCatalog, Structure, Vocabulary};
//!
//! let structure: Structure = "___\n_#_\n___".parse()?;
//! let vocabulary: Vocabulary = "cat\ncar\ntar\nrat".parse()?;
//! let catalog = SlotCatalog::new(structure, vocabulary);
//!
//! assert_eq!(catalog.len(), 4);
//! let top = catalog.slot_ids().next().unwrap();
//! assert_eq!(catalog.slot(top).direction(), Direction::Across);
//! assert_eq!(catalog.degree(top), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
mod error;
pub mod position;
pub mod slot;
pub mod structure;
pub mod vocabulary;

pub use self::{
    catalog::{Overlap, SlotCatalog, SlotId},
    error::*,
    position::Position,
    slot::{Direction, Slot},
    structure::Structure,
    vocabulary::{Vocabulary, Word},
};
