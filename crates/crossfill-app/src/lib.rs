//! File loading and rendering for the `crossfill` command.
//!
//! - [`load`] reads a structure file and a words file into a
//!   [`SlotCatalog`](crossfill_core::SlotCatalog).
//! - [`render`] turns a solved [`Assignment`](crossfill_solver::Assignment)
//!   into text or an SVG image.

pub use self::error::*;

mod error;
pub mod load;
pub mod render;
