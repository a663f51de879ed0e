use crossfill_core::{SlotCatalog, SlotId, Word};

use crate::{
    Arc, Assignment, Domains, PropagationStats, SolverError, TieBreak, TieBreaker,
    ac3_with_stats, enforce_node_consistency, order_domain_values, select_unassigned_slot,
};

/// Propagation performed during search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum Inference {
    /// Search over the domains left by the initial propagation, unchanged.
    #[default]
    None,
    /// After each tentative assignment, reduce the slot's domain to the chosen
    /// word and restore arc consistency towards it.
    ///
    /// Domains are snapshotted before each propagation and restored when the
    /// frame returns.
    MaintainArcConsistency,
}

/// Configuration of a [`BacktrackSolver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverOptions {
    /// Propagation performed during search.
    pub inference: Inference,
    /// How ties in slot and word ordering are broken.
    pub tie_break: TieBreak,
    /// Maximum number of tentative assignments before the search gives up.
    ///
    /// `None` searches until the space is exhausted.
    pub step_limit: Option<usize>,
}

/// Why a solve found no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Unsatisfiable {
    /// Node or arc consistency emptied a domain before search started.
    #[display("propagation")]
    Propagation,
    /// Search exhausted every branch.
    #[display("search")]
    Search,
}

/// Statistics collected by [`BacktrackSolver::solve_with_stats`].
#[derive(Debug, Clone, Default)]
pub struct SolverStats {
    propagation: PropagationStats,
    nodes: usize,
    backtracks: usize,
    unsatisfiable: Option<Unsatisfiable>,
}

impl SolverStats {
    /// Returns the arc-consistency work, including propagation during search.
    #[must_use]
    pub fn propagation(&self) -> PropagationStats {
        self.propagation
    }

    /// Returns the number of tentative assignments made.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the number of tentative assignments that were undone.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Returns why the last solve found no solution, or `None` if it found one.
    #[must_use]
    pub fn unsatisfiable(&self) -> Option<Unsatisfiable> {
        self.unsatisfiable
    }
}

/// Fills a crossword by propagation followed by depth-first search.
///
/// [`solve`](Self::solve) runs node consistency and one AC-3 pass over every
/// arc, then extends an empty [`Assignment`] one slot at a time:
///
/// - the next slot is chosen by [`select_unassigned_slot`],
/// - its candidates are tried in [`order_domain_values`] order,
/// - a candidate is only tried if [`Assignment::is_consistent_extension`] holds,
/// - an extension whose subtree fails is undone before the next candidate.
///
/// The first complete assignment found is returned.
///
/// # Examples
///
/// ```
/// use crossfill_core::{SlotCatalog, SlotId, Structure, Vocabulary};
/// use crossfill_solver::{BacktrackSolver, Inference, SolverOptions, SolverStats};
///
/// let structure: Structure = "#_#\n___\n#_#".parse()?;
/// let vocabulary: Vocabulary = "cat\ncar\narc".parse()?;
/// let catalog = SlotCatalog::new(structure, vocabulary);
///
/// let solver = BacktrackSolver::new(SolverOptions {
///     inference: Inference::MaintainArcConsistency,
///     ..SolverOptions::default()
/// });
/// let mut stats = SolverStats::default();
/// let assignment = solver
///     .solve_with_stats(&catalog, &mut stats)?
///     .expect("grid is fillable");
///
/// let down = assignment.get(SlotId::new(0)).unwrap();
/// let across = assignment.get(SlotId::new(1)).unwrap();
/// assert_eq!(down.letter(1), across.letter(1));
/// assert_eq!(stats.backtracks(), 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BacktrackSolver {
    options: SolverOptions,
}

impl BacktrackSolver {
    /// Creates a solver with the given options.
    #[must_use]
    pub fn new(options: SolverOptions) -> Self {
        Self { options }
    }

    /// Finds a complete consistent assignment for `catalog`.
    ///
    /// Returns `Ok(None)` if no such assignment exists.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::StepLimitExceeded`] if the configured step limit
    /// is reached before the search concludes.
    pub fn solve(&self, catalog: &SlotCatalog) -> Result<Option<Assignment>, SolverError> {
        let mut stats = SolverStats::default();
        self.solve_with_stats(catalog, &mut stats)
    }

    /// Same as [`solve`](Self::solve), accumulating statistics into `stats`.
    ///
    /// [`SolverStats::unsatisfiable`] is overwritten with the outcome of this call.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::StepLimitExceeded`] if the configured step limit
    /// is reached before the search concludes.
    pub fn solve_with_stats(
        &self,
        catalog: &SlotCatalog,
        stats: &mut SolverStats,
    ) -> Result<Option<Assignment>, SolverError> {
        stats.unsatisfiable = None;
        let mut domains = Domains::new(catalog);
        enforce_node_consistency(catalog, &mut domains);
        if let Some(slot) = domains.first_empty() {
            log::debug!("no word fits {}", catalog.slot(slot));
            stats.unsatisfiable = Some(Unsatisfiable::Propagation);
            return Ok(None);
        }
        if !ac3_with_stats(catalog, &mut domains, None, &mut stats.propagation) {
            stats.unsatisfiable = Some(Unsatisfiable::Propagation);
            return Ok(None);
        }
        log::debug!(
            "propagation left {} candidates over {} slots",
            domains.total_candidates(),
            catalog.len()
        );
        self.backtrack(catalog, domains, Assignment::new(), stats)
    }

    /// Searches for a completion of `assignment` over `domains`.
    ///
    /// `assignment` must be consistent and `domains` must hold candidates for
    /// every slot of `catalog`. No propagation is run up front; call
    /// [`solve`](Self::solve) to start from scratch.
    ///
    /// Returns the completed assignment, or `Ok(None)` if no consistent
    /// completion exists.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::StepLimitExceeded`] if the configured step limit
    /// is reached before the search concludes.
    pub fn backtrack(
        &self,
        catalog: &SlotCatalog,
        domains: Domains,
        assignment: Assignment,
        stats: &mut SolverStats,
    ) -> Result<Option<Assignment>, SolverError> {
        debug_assert_eq!(domains.slot_count(), catalog.len());
        let mut search = Search {
            catalog,
            inference: self.options.inference,
            step_limit: self.options.step_limit,
            tie_breaker: TieBreaker::new(self.options.tie_break),
            domains,
            assignment,
            stats,
        };
        if search.extend()? {
            debug_assert!(search.assignment.is_complete(catalog));
            debug_assert!(search.assignment.is_consistent(catalog));
            log::debug!(
                "found a solution after {} nodes and {} backtracks",
                search.stats.nodes,
                search.stats.backtracks
            );
            Ok(Some(search.assignment))
        } else {
            log::debug!("search exhausted after {} nodes", search.stats.nodes);
            search.stats.unsatisfiable = Some(Unsatisfiable::Search);
            Ok(None)
        }
    }
}

struct Search<'a> {
    catalog: &'a SlotCatalog,
    inference: Inference,
    step_limit: Option<usize>,
    tie_breaker: TieBreaker,
    domains: Domains,
    assignment: Assignment,
    stats: &'a mut SolverStats,
}

impl Search<'_> {
    /// Returns `true` once the assignment is complete. On `false` the
    /// assignment is back to its state on entry.
    fn extend(&mut self) -> Result<bool, SolverError> {
        let Some(slot) = select_unassigned_slot(
            self.catalog,
            &self.domains,
            &self.assignment,
            &mut self.tie_breaker,
        ) else {
            return Ok(true);
        };
        let candidates = order_domain_values(
            self.catalog,
            &self.domains,
            &self.assignment,
            slot,
            &mut self.tie_breaker,
        );
        for word in candidates {
            if !self
                .assignment
                .is_consistent_extension(self.catalog, slot, &word)
            {
                continue;
            }
            self.count_node()?;
            log::trace!(
                "depth {}: trying {word} for {}",
                self.assignment.len(),
                self.catalog.slot(slot)
            );
            self.assignment.insert(slot, word.clone());
            match self.descend(slot, &word) {
                Ok(true) => return Ok(true),
                Ok(false) => {
                    self.assignment.remove(slot);
                    self.stats.backtracks += 1;
                }
                Err(err) => {
                    self.assignment.remove(slot);
                    return Err(err);
                }
            }
        }
        Ok(false)
    }

    fn descend(&mut self, slot: SlotId, word: &Word) -> Result<bool, SolverError> {
        match self.inference {
            Inference::None => self.extend(),
            Inference::MaintainArcConsistency => {
                let arcs = Arc::incoming(self.catalog, slot);
                if arcs.is_empty() {
                    return self.extend();
                }
                let snapshot = self.domains.clone();
                self.domains.restrict(slot, word);
                let result = if ac3_with_stats(
                    self.catalog,
                    &mut self.domains,
                    Some(arcs),
                    &mut self.stats.propagation,
                ) {
                    self.extend()
                } else {
                    Ok(false)
                };
                self.domains = snapshot;
                result
            }
        }
    }

    fn count_node(&mut self) -> Result<(), SolverError> {
        if let Some(limit) = self.step_limit.filter(|&limit| self.stats.nodes >= limit) {
            log::debug!("step limit of {limit} reached");
            return Err(SolverError::StepLimitExceeded { limit });
        }
        self.stats.nodes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing::{all_solutions, catalog, catalog_strategy, word};

    fn solver(inference: Inference, tie_break: TieBreak) -> BacktrackSolver {
        BacktrackSolver::new(SolverOptions {
            inference,
            tie_break,
            step_limit: None,
        })
    }

    fn all_solvers() -> Vec<BacktrackSolver> {
        let mut solvers = Vec::new();
        for inference in [Inference::None, Inference::MaintainArcConsistency] {
            solvers.push(solver(inference, TieBreak::Lowest));
            for seed in [1, 42] {
                solvers.push(solver(inference, TieBreak::Shuffled { seed }));
            }
        }
        solvers
    }

    #[test]
    fn test_single_slot() {
        let catalog = catalog("___", &["cat", "dog"]);
        for solver in all_solvers() {
            let assignment = solver.solve(&catalog).unwrap().unwrap();
            let chosen = assignment.get(SlotId::new(0)).unwrap();
            assert!([word("cat"), word("dog")].contains(chosen));
        }
        let assignment = BacktrackSolver::default().solve(&catalog).unwrap().unwrap();
        assert_eq!(assignment.get(SlotId::new(0)), Some(&word("cat")));
    }

    #[test]
    fn test_crossing_slots_agree() {
        let catalog = catalog("#_#\n___\n#_#", &["cat", "car", "arc"]);
        let (down, across) = (SlotId::new(0), SlotId::new(1));
        for solver in all_solvers() {
            let assignment = solver.solve(&catalog).unwrap().unwrap();
            assert!(assignment.is_complete(&catalog));
            assert!(assignment.is_consistent(&catalog));
            let (d, a) = (assignment.get(down).unwrap(), assignment.get(across).unwrap());
            assert_eq!(d.letter(1), a.letter(1));
            assert_ne!(d, a);
        }

        let mut stats = SolverStats::default();
        let assignment = BacktrackSolver::default()
            .solve_with_stats(&catalog, &mut stats)
            .unwrap()
            .unwrap();
        assert_eq!(assignment.get(down), Some(&word("car")));
        assert_eq!(assignment.get(across), Some(&word("cat")));
        assert_eq!(stats.nodes(), 2);
        assert_eq!(stats.backtracks(), 0);
        assert_eq!(stats.unsatisfiable(), None);
    }

    #[test]
    fn test_missing_length_fails_before_search() {
        let catalog = catalog("_______\n#######\n___####", &["cat", "dog"]);
        for solver in all_solvers() {
            let mut stats = SolverStats::default();
            assert_eq!(solver.solve_with_stats(&catalog, &mut stats).unwrap(), None);
            assert_eq!(stats.unsatisfiable(), Some(Unsatisfiable::Propagation));
            assert_eq!(stats.nodes(), 0);
        }
    }

    #[test]
    fn test_words_are_not_reused() {
        let catalog = catalog("___\n###\n___", &["cat"]);
        for solver in all_solvers() {
            let mut stats = SolverStats::default();
            assert_eq!(solver.solve_with_stats(&catalog, &mut stats).unwrap(), None);
            assert!(stats.unsatisfiable().unwrap().is_search());
            assert_eq!(stats.nodes(), 1);
            assert_eq!(stats.backtracks(), 1);
        }
    }

    #[test]
    fn test_arc_wipeout_fails_before_search() {
        let catalog = catalog("#_\n__\n#_", &["axa", "ab"]);
        let mut stats = SolverStats::default();
        let result = BacktrackSolver::default().solve_with_stats(&catalog, &mut stats);
        assert_eq!(result.unwrap(), None);
        assert!(stats.unsatisfiable().unwrap().is_propagation());
        assert!(stats.propagation().removals() > 0);
        assert_eq!(stats.nodes(), 0);
    }

    #[test]
    fn test_empty_catalog_is_trivially_solved() {
        let catalog = catalog("_#\n#_", &["cat"]);
        assert!(catalog.is_empty());
        let assignment = BacktrackSolver::default().solve(&catalog).unwrap().unwrap();
        assert!(assignment.is_empty());
    }

    #[test]
    fn test_step_limit() {
        let catalog = catalog("#_#\n___\n#_#", &["cat", "car", "arc"]);
        let limited = |limit| {
            BacktrackSolver::new(SolverOptions {
                step_limit: Some(limit),
                ..SolverOptions::default()
            })
        };
        assert_eq!(
            limited(1).solve(&catalog).unwrap_err(),
            SolverError::StepLimitExceeded { limit: 1 }
        );
        assert!(limited(2).solve(&catalog).unwrap().is_some());

        // propagation failures never touch the budget
        let unfillable = crate::testing::catalog("____", &["cat"]);
        assert_eq!(limited(0).solve(&unfillable).unwrap(), None);
    }

    #[test]
    fn test_maintained_arc_consistency_propagates_during_search() {
        let catalog = catalog("#_#\n___\n#_#", &["cat", "car", "arc", "hot"]);
        let mut plain = SolverStats::default();
        let mut mac = SolverStats::default();
        let plain_result = solver(Inference::None, TieBreak::Lowest)
            .solve_with_stats(&catalog, &mut plain)
            .unwrap();
        let mac_result = solver(Inference::MaintainArcConsistency, TieBreak::Lowest)
            .solve_with_stats(&catalog, &mut mac)
            .unwrap();
        assert_eq!(plain_result, mac_result);
        assert!(mac.propagation().revisions() > plain.propagation().revisions());
        assert_eq!(mac.backtracks(), 0);
    }

    #[test]
    fn test_maintained_arc_consistency_skips_isolated_slots() {
        let mac = solver(Inference::MaintainArcConsistency, TieBreak::Lowest);
        let words = ["cat", "car", "arc", "dogs"];
        let crossing = catalog("#_#\n___\n#_#", &words);
        let with_isolated = catalog("#_#\n___\n#_#\n###\n____", &words);

        let mut expected = SolverStats::default();
        let mut actual = SolverStats::default();
        assert!(mac.solve_with_stats(&crossing, &mut expected).unwrap().is_some());
        let assignment = mac
            .solve_with_stats(&with_isolated, &mut actual)
            .unwrap()
            .unwrap();
        assert_eq!(assignment.get(SlotId::new(2)), Some(&word("dogs")));
        assert_eq!(
            actual.propagation().revisions(),
            expected.propagation().revisions()
        );
        assert_eq!(actual.nodes(), expected.nodes() + 1);
    }

    #[test]
    fn test_search_from_partial_assignment() {
        let catalog = catalog("#_#\n___\n#_#", &["cat", "car", "arc"]);
        let (down, across) = (SlotId::new(0), SlotId::new(1));
        let domains = Domains::new(&catalog);
        let mut partial = Assignment::new();
        partial.insert(across, word("car"));

        let mut stats = SolverStats::default();
        let assignment = BacktrackSolver::default()
            .backtrack(&catalog, domains, partial, &mut stats)
            .unwrap()
            .unwrap();
        assert_eq!(assignment.get(across), Some(&word("car")));
        assert_eq!(assignment.get(down), Some(&word("cat")));
    }

    #[test]
    fn test_stats_outcome_is_reset_per_solve() {
        let solver = BacktrackSolver::default();
        let mut stats = SolverStats::default();
        let unsolvable = catalog("___\n###\n___", &["cat"]);
        let solvable = catalog("___\n###\n___", &["cat", "dog"]);
        assert!(solver.solve_with_stats(&unsolvable, &mut stats).unwrap().is_none());
        assert!(stats.unsatisfiable().is_some());
        assert!(solver.solve_with_stats(&solvable, &mut stats).unwrap().is_some());
        assert!(stats.unsatisfiable().is_none());
        assert_eq!(stats.nodes(), 3);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_agrees_with_brute_force(catalog in catalog_strategy()) {
            let solutions = all_solutions(&catalog);
            for solver in all_solvers() {
                match solver.solve(&catalog).unwrap() {
                    Some(assignment) => {
                        prop_assert!(assignment.is_complete(&catalog));
                        prop_assert!(assignment.is_consistent(&catalog));
                        prop_assert!(solutions.contains(&assignment));
                    }
                    None => prop_assert!(solutions.is_empty()),
                }
            }
        }
    }
}
