/// Errors that abort a solve before it reaches a definitive answer.
///
/// An unsatisfiable grid is not an error: it is reported as `Ok(None)` by
/// [`BacktrackSolver::solve`](crate::BacktrackSolver::solve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// The search tried more tentative assignments than the configured limit.
    #[display("search exceeded the step limit of {limit}")]
    StepLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}
