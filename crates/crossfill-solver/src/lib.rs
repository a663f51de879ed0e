//! Constraint-satisfaction solver for crossword filling.
//!
//! The solver treats every slot of a [`SlotCatalog`](crossfill_core::SlotCatalog)
//! as a variable whose domain is a set of candidate words, and fills the grid in
//! three phases:
//!
//! 1. [`enforce_node_consistency`] drops candidates whose length does not match the slot.
//! 2. [`ac3`] propagates the crossing constraints until every candidate has a
//!    letter-compatible partner in each crossing slot.
//! 3. [`BacktrackSolver`] searches the remaining candidates depth-first, choosing
//!    slots by minimum remaining values (ties broken by degree) and words by
//!    least constraining value.
//!
//! # Examples
//!
//! ```
//! use crossfill_core::{SlotCatalog, Structure, Vocabulary};
//! use crossfill_solver::BacktrackSolver;
//!
//! let structure: Structure = "#_#\n___\n#_#".parse()?;
//! let vocabulary: Vocabulary = "cat\ncar\narc".parse()?;
//! let catalog = SlotCatalog::new(structure, vocabulary);
//!
//! let solver = BacktrackSolver::default();
//! let assignment = solver.solve(&catalog)?.expect("grid is fillable");
//! assert!(assignment.is_complete(&catalog));
//! assert!(assignment.is_consistent(&catalog));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    arc_consistency::*, assignment::*, backtrack_solver::*, domains::*, error::*,
    heuristics::*, node_consistency::*,
};

mod arc_consistency;
mod assignment;
mod backtrack_solver;
mod domains;
mod error;
mod heuristics;
mod node_consistency;

#[cfg(test)]
mod testing;
