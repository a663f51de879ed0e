//! Fixture builders and a brute-force reference solver for tests.

use crossfill_core::{SlotCatalog, SlotId, Structure, Vocabulary, Word};
use proptest::prelude::*;

use crate::Assignment;

/// Builds a catalog from a structure string and a word list.
#[track_caller]
pub(crate) fn catalog(structure: &str, words: &[&str]) -> SlotCatalog {
    let structure: Structure = structure.parse().unwrap();
    let vocabulary: Vocabulary = words.iter().map(|w| word(w)).collect();
    SlotCatalog::new(structure, vocabulary)
}

#[track_caller]
pub(crate) fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

/// Enumerates every complete consistent assignment by exhaustive search.
///
/// Slots are filled in id order from the unfiltered vocabulary, with no
/// propagation and no heuristics, so it shares no code path with the solver
/// beyond [`Assignment::is_consistent_extension`].
pub(crate) fn all_solutions(catalog: &SlotCatalog) -> Vec<Assignment> {
    fn extend(
        catalog: &SlotCatalog,
        next: usize,
        assignment: &mut Assignment,
        solutions: &mut Vec<Assignment>,
    ) {
        if next == catalog.len() {
            solutions.push(assignment.clone());
            return;
        }
        let slot = SlotId::new(next);
        for word in catalog.vocabulary() {
            if assignment.is_consistent_extension(catalog, slot, word) {
                assignment.insert(slot, word.clone());
                extend(catalog, next + 1, assignment, solutions);
                assignment.remove(slot);
            }
        }
    }

    let mut solutions = Vec::new();
    extend(catalog, 0, &mut Assignment::new(), &mut solutions);
    solutions
}

/// Small random grids with a small vocabulary over a three-letter alphabet.
///
/// The alphabet is narrow so that crossings are often satisfiable and the
/// brute-force reference stays fast.
pub(crate) fn catalog_strategy() -> impl Strategy<Value = SlotCatalog> {
    let structure = (1..=4_usize, 1..=4_usize).prop_flat_map(|(height, width)| {
        prop::collection::vec(prop::collection::vec(prop::bool::weighted(0.75), width), height)
            .prop_map(|rows| Structure::from_rows(&rows).unwrap())
    });
    let vocabulary = prop::collection::vec("[A-C]{2,4}", 0..10).prop_map(|words| {
        words.iter().map(|w| word(w)).collect::<Vocabulary>()
    });
    (structure, vocabulary)
        .prop_map(|(structure, vocabulary)| SlotCatalog::new(structure, vocabulary))
}
