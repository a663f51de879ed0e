//! The slot catalog: slots, vocabulary and the overlap relation between slots.

use std::collections::HashSet;

use crate::{CatalogError, Slot, Structure, Vocabulary};

/// Dense index of a slot inside a [`SlotCatalog`].
///
/// Ids run from `0` to `catalog.len() - 1` in slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("#{_0}")]
pub struct SlotId(usize);

impl SlotId {
    /// Creates an id from a raw index.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// The letter indices at which two slots share a cell.
///
/// An overlap is oriented: `own` indexes the slot it was looked up for and
/// `other` indexes its neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Overlap {
    /// Letter index inside the first slot.
    pub own: usize,
    /// Letter index inside the second slot.
    pub other: usize,
}

impl Overlap {
    /// Returns the same overlap seen from the other slot.
    #[must_use]
    #[inline]
    pub const fn flip(self) -> Self {
        Self {
            own: self.other,
            other: self.own,
        }
    }
}

/// The fixed description of a crossword filling problem.
///
/// A catalog owns the grid [`Structure`], its slots (the variables of the
/// problem), the [`Vocabulary`] and the precomputed overlap relation. It is
/// immutable once built; solvers only read from it.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Overlap, SlotCatalog, Structure, Vocabulary};
///
/// let structure: Structure = "#_#\n___\n#_#".parse()?;
/// let catalog = SlotCatalog::new(structure, Vocabulary::new());
///
/// let ids: Vec<_> = catalog.slot_ids().collect();
/// let (down, across) = (ids[0], ids[1]);
/// assert_eq!(catalog.overlap(down, across), Some(Overlap { own: 1, other: 1 }));
/// assert_eq!(catalog.neighbors(down).collect::<Vec<_>>(), [across]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct SlotCatalog {
    structure: Structure,
    slots: Vec<Slot>,
    vocabulary: Vocabulary,
    /// Neighbors of each slot with the oriented overlap, ascending by id.
    neighbors: Vec<Vec<(SlotId, Overlap)>>,
}

impl SlotCatalog {
    /// Builds a catalog from every slot of `structure`.
    #[must_use]
    pub fn new(structure: Structure, vocabulary: Vocabulary) -> Self {
        let slots = structure.slots();
        let neighbors = compute_neighbors(&slots);
        let catalog = Self {
            structure,
            slots,
            vocabulary,
            neighbors,
        };
        log::debug!(
            "catalog: {}x{} grid, {} slots, {} words",
            catalog.structure.width(),
            catalog.structure.height(),
            catalog.len(),
            catalog.vocabulary.len()
        );
        catalog
    }

    /// Builds a catalog from an explicit slot list.
    ///
    /// Slot ids follow the order of `slots`.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if a slot is empty, leaves the grid, covers a
    /// blocked cell, appears twice, or shares more than one cell with another slot.
    pub fn with_slots(
        structure: Structure,
        slots: Vec<Slot>,
        vocabulary: Vocabulary,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(slots.len());
        for &slot in &slots {
            if slot.length() == 0 {
                return Err(CatalogError::ZeroLength { slot });
            }
            for position in slot.cells() {
                if !structure.contains(position) {
                    return Err(CatalogError::OutOfBounds { slot, position });
                }
                if !structure.is_open(position) {
                    return Err(CatalogError::BlockedCell { slot, position });
                }
            }
            if !seen.insert(slot) {
                return Err(CatalogError::DuplicateSlot { slot });
            }
        }
        for (i, first) in slots.iter().enumerate() {
            for second in &slots[i + 1..] {
                let shared = first
                    .cells()
                    .filter(|&pos| second.index_of(pos).is_some())
                    .count();
                if shared > 1 {
                    return Err(CatalogError::AmbiguousOverlap {
                        first: *first,
                        second: *second,
                    });
                }
            }
        }

        let neighbors = compute_neighbors(&slots);
        Ok(Self {
            structure,
            slots,
            vocabulary,
            neighbors,
        })
    }

    /// Returns the grid structure.
    #[must_use]
    #[inline]
    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Returns the vocabulary.
    #[must_use]
    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Returns the number of slots.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the catalog has no slots.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns all slots, indexed by [`SlotId::index`].
    #[must_use]
    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the slot with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this catalog.
    #[must_use]
    #[inline]
    pub fn slot(&self, id: SlotId) -> &Slot {
        &self.slots[id.index()]
    }

    /// Returns every slot id in ascending order.
    pub fn slot_ids(&self) -> impl ExactSizeIterator<Item = SlotId> + use<> {
        (0..self.slots.len()).map(SlotId::new)
    }

    /// Returns the overlap between `x` and `y`, oriented so that `own` indexes `x`.
    ///
    /// Returns `None` if the slots share no cell, including when `x == y`.
    #[must_use]
    pub fn overlap(&self, x: SlotId, y: SlotId) -> Option<Overlap> {
        self.neighbors[x.index()]
            .iter()
            .find_map(|&(id, overlap)| (id == y).then_some(overlap))
    }

    /// Returns the slots sharing a cell with `x`, ascending by id.
    pub fn neighbors(&self, x: SlotId) -> impl ExactSizeIterator<Item = SlotId> + '_ {
        self.neighbors[x.index()].iter().map(|&(id, _)| id)
    }

    /// Returns the neighbors of `x` together with the oriented overlaps.
    #[must_use]
    #[inline]
    pub fn overlaps(&self, x: SlotId) -> &[(SlotId, Overlap)] {
        &self.neighbors[x.index()]
    }

    /// Returns the number of neighbors of `x`.
    #[must_use]
    #[inline]
    pub fn degree(&self, x: SlotId) -> usize {
        self.neighbors[x.index()].len()
    }

    /// Returns every ordered pair of neighboring slots.
    pub fn arcs(&self) -> impl Iterator<Item = (SlotId, SlotId)> + '_ {
        self.slot_ids()
            .flat_map(move |x| self.neighbors(x).map(move |y| (x, y)))
    }

    /// Returns the slots whose length no vocabulary word has.
    ///
    /// A catalog with such slots is valid but has no solution.
    #[must_use]
    pub fn unfillable_slots(&self) -> Vec<SlotId> {
        self.slot_ids()
            .filter(|&id| !self.vocabulary.contains_length(self.slot(id).length()))
            .collect()
    }
}

fn compute_neighbors(slots: &[Slot]) -> Vec<Vec<(SlotId, Overlap)>> {
    let mut neighbors = vec![Vec::new(); slots.len()];
    for (i, x) in slots.iter().enumerate() {
        for (j, y) in slots.iter().enumerate().skip(i + 1) {
            let shared = x
                .cells()
                .enumerate()
                .find_map(|(own, pos)| y.index_of(pos).map(|other| Overlap { own, other }));
            if let Some(overlap) = shared {
                neighbors[i].push((SlotId::new(j), overlap));
                neighbors[j].push((SlotId::new(i), overlap.flip()));
            }
        }
    }
    for list in &mut neighbors {
        list.sort_unstable_by_key(|&(id, _)| id);
    }
    neighbors
}
