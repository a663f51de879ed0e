use std::collections::{BTreeMap, HashSet, btree_map};

use crossfill_core::{Slot, SlotCatalog, SlotId, Word};

/// A partial mapping from slots to chosen words.
///
/// The search extends an assignment one slot at a time and undoes the last
/// extension when it backtracks. An assignment is *complete* when every slot
/// of the catalog has a word, and *consistent* when:
///
/// - every word has its slot's length,
/// - no word is used by two slots,
/// - every two assigned slots that cross agree on the shared letter.
///
/// # Examples
///
/// ```
/// use crossfill_core::{SlotCatalog, SlotId, Structure, Vocabulary, Word};
/// use crossfill_solver::Assignment;
///
/// let structure: Structure = "#_#\n___\n#_#".parse()?;
/// let catalog = SlotCatalog::new(structure, Vocabulary::new());
/// let (down, across) = (SlotId::new(0), SlotId::new(1));
///
/// let mut assignment = Assignment::new();
/// assignment.insert(down, Word::new("cat").unwrap());
/// assert!(!assignment.is_complete(&catalog));
///
/// let car = Word::new("car").unwrap();
/// let arc = Word::new("arc").unwrap();
/// assert!(assignment.is_consistent_extension(&catalog, across, &car));
/// assert!(!assignment.is_consistent_extension(&catalog, across, &arc));
///
/// assignment.insert(across, car);
/// assert!(assignment.is_complete(&catalog));
/// assert!(assignment.is_consistent(&catalog));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    words: BTreeMap<SlotId, Word>,
}

impl Assignment {
    /// Creates an empty assignment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the word assigned to `slot`.
    #[must_use]
    #[inline]
    pub fn get(&self, slot: SlotId) -> Option<&Word> {
        self.words.get(&slot)
    }

    /// Returns `true` if `slot` has a word.
    #[must_use]
    #[inline]
    pub fn contains(&self, slot: SlotId) -> bool {
        self.words.contains_key(&slot)
    }

    /// Assigns `word` to `slot`, returning the previous word.
    pub fn insert(&mut self, slot: SlotId, word: Word) -> Option<Word> {
        self.words.insert(slot, word)
    }

    /// Removes the word of `slot`, returning it.
    pub fn remove(&mut self, slot: SlotId) -> Option<Word> {
        self.words.remove(&slot)
    }

    /// Returns the number of assigned slots.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no slot is assigned.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the assigned slots with their words, ascending by id.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (SlotId, &Word)> {
        self.words.iter().map(|(&id, word)| (id, word))
    }

    /// Returns the assigned slots resolved against `catalog`, ascending by id.
    pub fn slots<'a>(
        &'a self,
        catalog: &'a SlotCatalog,
    ) -> impl ExactSizeIterator<Item = (&'a Slot, &'a Word)> {
        self.words.iter().map(|(&id, word)| (catalog.slot(id), word))
    }

    /// Returns `true` if every slot of `catalog` has a word.
    #[must_use]
    pub fn is_complete(&self, catalog: &SlotCatalog) -> bool {
        catalog.slot_ids().all(|id| self.contains(id))
    }

    /// Checks every constraint among the assigned slots.
    #[must_use]
    pub fn is_consistent(&self, catalog: &SlotCatalog) -> bool {
        let mut seen = HashSet::with_capacity(self.words.len());
        for (&id, word) in &self.words {
            if word.len() != catalog.slot(id).length() || !seen.insert(word) {
                return false;
            }
            let agrees = catalog.overlaps(id).iter().all(|&(neighbor, overlap)| {
                self.get(neighbor)
                    .is_none_or(|other| word.get(overlap.own) == other.get(overlap.other))
            });
            if !agrees {
                return false;
            }
        }
        true
    }

    /// Returns `true` if assigning `word` to `slot` keeps this consistent assignment consistent.
    ///
    /// Only the constraints involving `slot` are checked: its length, that no
    /// other slot already uses `word`, and that every assigned neighbor agrees
    /// on the shared letter. Any word currently assigned to `slot` itself is
    /// ignored.
    #[must_use]
    pub fn is_consistent_extension(
        &self,
        catalog: &SlotCatalog,
        slot: SlotId,
        word: &Word,
    ) -> bool {
        if word.len() != catalog.slot(slot).length() {
            return false;
        }
        if self
            .words
            .iter()
            .any(|(&other, assigned)| other != slot && assigned == word)
        {
            return false;
        }
        catalog.overlaps(slot).iter().all(|&(neighbor, overlap)| {
            self.get(neighbor)
                .is_none_or(|other| word.get(overlap.own) == other.get(overlap.other))
        })
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = (&'a SlotId, &'a Word);
    type IntoIter = btree_map::Iter<'a, SlotId, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{catalog, word};

    #[test]
    fn test_length_mismatch_is_inconsistent() {
        let catalog = catalog("___", &[]);
        let slot = SlotId::new(0);
        let assignment = Assignment::new();
        assert!(!assignment.is_consistent_extension(&catalog, slot, &word("ab")));

        let mut assignment = Assignment::new();
        assignment.insert(slot, word("abcd"));
        assert!(!assignment.is_consistent(&catalog));
    }

    #[test]
    fn test_duplicate_words_are_inconsistent() {
        let catalog = catalog("___\n###\n___", &[]);
        let (first, second) = (SlotId::new(0), SlotId::new(1));
        let mut assignment = Assignment::new();
        assignment.insert(first, word("cat"));
        assert!(!assignment.is_consistent_extension(&catalog, second, &word("cat")));
        assert!(assignment.is_consistent_extension(&catalog, second, &word("dog")));
        // reassigning a slot its own word is not a duplicate
        assert!(assignment.is_consistent_extension(&catalog, first, &word("cat")));

        assignment.insert(second, word("cat"));
        assert!(!assignment.is_consistent(&catalog));
    }

    #[test]
    fn test_crossing_letters_must_agree() {
        let catalog = catalog("#_#\n___\n#_#", &[]);
        let (down, across) = (SlotId::new(0), SlotId::new(1));
        let mut assignment = Assignment::new();
        assignment.insert(across, word("bob"));
        assert!(assignment.is_consistent_extension(&catalog, down, &word("not")));
        assert!(!assignment.is_consistent_extension(&catalog, down, &word("cat")));

        assignment.insert(down, word("cat"));
        assert!(!assignment.is_consistent(&catalog));
        assignment.insert(down, word("hot"));
        assert!(assignment.is_consistent(&catalog));
        assert!(assignment.is_complete(&catalog));
    }

    #[test]
    fn test_undo_restores_previous_state() {
        let catalog = catalog("#_#\n___\n#_#", &[]);
        let (down, across) = (SlotId::new(0), SlotId::new(1));
        let mut assignment = Assignment::new();
        assignment.insert(down, word("cat"));
        let before = assignment.clone();

        assignment.insert(across, word("bat"));
        assert_eq!(assignment.remove(across), Some(word("bat")));
        assert_eq!(assignment, before);
        assert!(assignment.is_consistent_extension(&catalog, across, &word("bat")));
        assert!(!assignment.is_consistent_extension(&catalog, across, &word("cat")));
        assert_eq!(
            assignment.slots(&catalog).map(|(slot, w)| (*slot, w.clone())).collect::<Vec<_>>(),
            [(*catalog.slot(down), word("cat"))]
        );
    }
}
