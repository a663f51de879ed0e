use std::cmp::Reverse;

use crossfill_core::{SlotCatalog, SlotId, Word};
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::{Assignment, Domains};

/// How ties between equally ranked slots or words are broken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum TieBreak {
    /// Prefer the lowest slot id and the lexicographically smallest word.
    #[default]
    Lowest,
    /// Break ties by a pseudo-random order that is reproducible for a given seed.
    Shuffled {
        /// Seed of the permutation generator.
        seed: u64,
    },
}

/// Applies a [`TieBreak`] policy to candidate lists before they are ranked.
///
/// Ranking uses stable sorts and first-minimum selection, so whatever order
/// the tie breaker leaves candidates in decides among equal scores.
#[derive(Debug, Clone)]
pub struct TieBreaker {
    rng: Option<Pcg64>,
}

impl TieBreaker {
    /// Creates a tie breaker for `policy`.
    #[must_use]
    pub fn new(policy: TieBreak) -> Self {
        let rng = match policy {
            TieBreak::Lowest => None,
            TieBreak::Shuffled { seed } => Some(Pcg64::seed_from_u64(seed)),
        };
        Self { rng }
    }

    fn arrange<T>(&mut self, items: &mut [T]) {
        if let Some(rng) = &mut self.rng {
            items.shuffle(rng);
        }
    }
}

impl Default for TieBreaker {
    fn default() -> Self {
        Self::new(TieBreak::default())
    }
}

/// Chooses the next slot to fill.
///
/// Picks the unassigned slot with the fewest remaining candidates (minimum
/// remaining values). Among those, the slot with the most neighbors wins
/// (degree). Remaining ties go to `tie_breaker`.
///
/// Returns `None` once every slot is assigned.
///
/// # Examples
///
/// ```
/// use crossfill_core::{SlotCatalog, SlotId, Structure, Vocabulary};
/// use crossfill_solver::{Assignment, Domains, TieBreaker, select_unassigned_slot};
///
/// // a long across slot crossed by two short down slots
/// let structure: Structure = "___\n_#_".parse()?;
/// let vocabulary: Vocabulary = "cat\ncar\nat".parse()?;
/// let catalog = SlotCatalog::new(structure, vocabulary);
///
/// let domains = Domains::new(&catalog);
/// let mut tie_breaker = TieBreaker::default();
/// let slot = select_unassigned_slot(&catalog, &domains, &Assignment::new(), &mut tie_breaker);
/// // all domains are equally large, so the across slot wins on degree
/// assert_eq!(slot, Some(SlotId::new(0)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn select_unassigned_slot(
    catalog: &SlotCatalog,
    domains: &Domains,
    assignment: &Assignment,
    tie_breaker: &mut TieBreaker,
) -> Option<SlotId> {
    let mut unassigned: Vec<SlotId> = catalog
        .slot_ids()
        .filter(|&id| !assignment.contains(id))
        .collect();
    tie_breaker.arrange(&mut unassigned);
    unassigned
        .into_iter()
        .min_by_key(|&id| (domains.len(id), Reverse(catalog.degree(id))))
}

/// Returns the number of candidates `word` would rule out for the unassigned neighbors of `slot`.
///
/// For each unassigned neighbor, this counts the neighbor's candidates whose
/// letter at the shared cell differs from the letter of `word`.
#[must_use]
pub fn count_eliminations(
    catalog: &SlotCatalog,
    domains: &Domains,
    assignment: &Assignment,
    slot: SlotId,
    word: &Word,
) -> usize {
    catalog
        .overlaps(slot)
        .iter()
        .filter(|&&(neighbor, _)| !assignment.contains(neighbor))
        .map(|&(neighbor, overlap)| {
            let letter = word.get(overlap.own);
            domains
                .get(neighbor)
                .iter()
                .filter(|candidate| candidate.get(overlap.other) != letter)
                .count()
        })
        .sum()
}

/// Orders the candidates of `slot`, least constraining first.
///
/// Each candidate is ranked by [`count_eliminations`]; candidates ruling out
/// fewer options for the unassigned neighbors come first. Ties keep the
/// order left by `tie_breaker` (lexicographic for [`TieBreak::Lowest`]).
///
/// # Examples
///
/// ```
/// use crossfill_core::{SlotCatalog, SlotId, Structure, Vocabulary};
/// use crossfill_solver::{Assignment, Domains, TieBreaker, order_domain_values};
///
/// let structure: Structure = "#_#\n___\n#_#".parse()?;
/// let vocabulary: Vocabulary = "cat\ncar\nhot".parse()?;
/// let catalog = SlotCatalog::new(structure, vocabulary);
/// let domains = Domains::new(&catalog);
///
/// let order = order_domain_values(
///     &catalog,
///     &domains,
///     &Assignment::new(),
///     SlotId::new(0),
///     &mut TieBreaker::default(),
/// );
/// let order: Vec<_> = order.iter().map(|w| w.as_str()).collect();
/// // an `A` in the middle keeps two across words alive, an `O` only one
/// assert_eq!(order, ["CAR", "CAT", "HOT"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn order_domain_values(
    catalog: &SlotCatalog,
    domains: &Domains,
    assignment: &Assignment,
    slot: SlotId,
    tie_breaker: &mut TieBreaker,
) -> Vec<Word> {
    let mut ranked: Vec<(usize, Word)> = domains
        .get(slot)
        .iter()
        .map(|word| {
            let eliminated = count_eliminations(catalog, domains, assignment, slot, word);
            (eliminated, word.clone())
        })
        .collect();
    tie_breaker.arrange(&mut ranked);
    ranked.sort_by_key(|&(eliminated, _)| eliminated);
    ranked.into_iter().map(|(_, word)| word).collect()
}
