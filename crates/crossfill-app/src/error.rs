use std::{io, path::PathBuf};

use crossfill_core::{StructureError, VocabularyError};
use crossfill_solver::SolverError;

/// Errors reported by the command-line front end.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    /// An input file could not be read.
    #[from(skip)]
    #[display("failed to read {}: {source}", path.display())]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The output file could not be written.
    #[from(skip)]
    #[display("failed to write {}: {source}", path.display())]
    Write {
        /// The file that was being written.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The structure file is malformed.
    #[display("invalid structure: {_0}")]
    Structure(#[from] StructureError),
    /// The words file is malformed.
    #[display("invalid word list: {_0}")]
    Vocabulary(#[from] VocabularyError),
    /// The solver gave up.
    #[display("{_0}")]
    Solver(#[from] SolverError),
}
