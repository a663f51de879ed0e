use std::collections::BTreeSet;

use crossfill_core::{SlotCatalog, SlotId, Word};

/// Candidate words for every slot of a catalog.
///
/// Each slot owns an ordered set, so iteration is lexicographic and results
/// are reproducible. Domains only ever shrink: node consistency and arc
/// consistency remove candidates, nothing adds them back. Search-time
/// propagation takes a [`Clone`] snapshot and restores it on backtrack.
///
/// # Examples
///
/// ```
/// use crossfill_core::{SlotCatalog, SlotId, Structure, Vocabulary};
/// use crossfill_solver::Domains;
///
/// let structure: Structure = "___".parse()?;
/// let vocabulary: Vocabulary = "cat\ndog\nhorse".parse()?;
/// let catalog = SlotCatalog::new(structure, vocabulary);
///
/// let domains = Domains::new(&catalog);
/// assert_eq!(domains.len(SlotId::new(0)), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domains {
    domains: Vec<BTreeSet<Word>>,
}

impl Domains {
    /// Creates domains holding the full vocabulary for every slot.
    #[must_use]
    pub fn new(catalog: &SlotCatalog) -> Self {
        let words: BTreeSet<Word> = catalog.vocabulary().iter().cloned().collect();
        Self {
            domains: vec![words; catalog.len()],
        }
    }

    /// Returns the number of slots.
    #[must_use]
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.domains.len()
    }

    /// Returns the candidates of `slot`.
    #[must_use]
    #[inline]
    pub fn get(&self, slot: SlotId) -> &BTreeSet<Word> {
        &self.domains[slot.index()]
    }

    /// Returns the number of candidates of `slot`.
    #[must_use]
    #[inline]
    pub fn len(&self, slot: SlotId) -> usize {
        self.domains[slot.index()].len()
    }

    /// Returns `true` if `slot` has no candidates left.
    #[must_use]
    #[inline]
    pub fn is_empty(&self, slot: SlotId) -> bool {
        self.domains[slot.index()].is_empty()
    }

    /// Returns `true` if `word` is a candidate of `slot`.
    #[must_use]
    #[inline]
    pub fn contains(&self, slot: SlotId, word: &Word) -> bool {
        self.domains[slot.index()].contains(word)
    }

    /// Removes `word` from `slot`. Returns `true` if it was present.
    pub fn remove(&mut self, slot: SlotId, word: &Word) -> bool {
        self.domains[slot.index()].remove(word)
    }

    /// Keeps only the candidates of `slot` matching `keep`.
    ///
    /// Returns the number of removed candidates.
    pub fn retain<F>(&mut self, slot: SlotId, keep: F) -> usize
    where
        F: FnMut(&Word) -> bool,
    {
        let domain = &mut self.domains[slot.index()];
        let before = domain.len();
        domain.retain(keep);
        before - domain.len()
    }

    /// Reduces `slot` to the single candidate `word`.
    ///
    /// Returns the number of removed candidates. If `word` was not a candidate,
    /// the domain becomes empty.
    pub fn restrict(&mut self, slot: SlotId, word: &Word) -> usize {
        self.retain(slot, |candidate| candidate == word)
    }

    /// Returns the total number of candidates over all slots.
    #[must_use]
    pub fn total_candidates(&self) -> usize {
        self.domains.iter().map(BTreeSet::len).sum()
    }

    /// Returns the first slot with no candidates, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<SlotId> {
        self.domains
            .iter()
            .position(BTreeSet::is_empty)
            .map(SlotId::new)
    }

    /// Returns `true` if every domain of `self` is a subset of the same slot's domain in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.domains.len() == other.domains.len()
            && self
                .domains
                .iter()
                .zip(&other.domains)
                .all(|(mine, theirs)| mine.is_subset(theirs))
    }

    /// Returns every slot with its candidates, ascending by id.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (SlotId, &BTreeSet<Word>)> {
        self.domains
            .iter()
            .enumerate()
            .map(|(i, domain)| (SlotId::new(i), domain))
    }
}
