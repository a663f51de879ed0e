use std::collections::VecDeque;

use crossfill_core::{SlotCatalog, SlotId};

use crate::Domains;

/// A directed constraint between two neighboring slots.
///
/// Revising the arc `from -> to` removes every candidate of `from` that has
/// no letter-compatible candidate in `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arc {
    /// The slot whose domain is revised.
    pub from: SlotId,
    /// The slot that has to support it.
    pub to: SlotId,
}

impl Arc {
    /// Creates the arc `from -> to`.
    #[must_use]
    #[inline]
    pub const fn new(from: SlotId, to: SlotId) -> Self {
        Self { from, to }
    }

    /// Returns every arc of the catalog: one per ordered pair of neighboring slots.
    #[must_use]
    pub fn all(catalog: &SlotCatalog) -> Vec<Self> {
        catalog.arcs().map(|(from, to)| Self::new(from, to)).collect()
    }

    /// Returns the arcs pointing at `slot` from each of its neighbors.
    #[must_use]
    pub fn incoming(catalog: &SlotCatalog, slot: SlotId) -> Vec<Self> {
        catalog
            .neighbors(slot)
            .map(|neighbor| Self::new(neighbor, slot))
            .collect()
    }
}

/// Work done by arc-consistency propagation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropagationStats {
    revisions: usize,
    removals: usize,
}

impl PropagationStats {
    /// Returns the number of arcs revised.
    #[must_use]
    pub fn revisions(&self) -> usize {
        self.revisions
    }

    /// Returns the number of candidates removed.
    #[must_use]
    pub fn removals(&self) -> usize {
        self.removals
    }
}

/// Makes `x` arc consistent with `y`.
///
/// Removes every candidate of `x` whose letter at the shared cell matches no
/// candidate of `y`. Slots that share no cell are left untouched.
///
/// Returns `true` if the domain of `x` changed.
///
/// # Examples
///
/// ```
/// use crossfill_core::{SlotCatalog, SlotId, Structure, Vocabulary};
/// use crossfill_solver::{Domains, enforce_node_consistency, revise};
///
/// let structure: Structure = "#_#\n___".parse()?;
/// let vocabulary: Vocabulary = "cat\ncar\narc\npa\nox".parse()?;
/// let catalog = SlotCatalog::new(structure, vocabulary);
/// let (down, across) = (SlotId::new(0), SlotId::new(1));
///
/// let mut domains = Domains::new(&catalog);
/// enforce_node_consistency(&catalog, &mut domains);
/// assert!(revise(&catalog, &mut domains, down, across));
/// // No across word has an `X` at the crossing, so OX goes.
/// assert_eq!(domains.len(down), 1);
/// assert!(!revise(&catalog, &mut domains, down, across));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn revise(catalog: &SlotCatalog, domains: &mut Domains, x: SlotId, y: SlotId) -> bool {
    let Some(overlap) = catalog.overlap(x, y) else {
        return false;
    };
    let mut supported = [false; 256];
    for word in domains.get(y) {
        if let Some(letter) = word.get(overlap.other) {
            supported[usize::from(letter)] = true;
        }
    }
    let removed = domains.retain(x, |word| {
        word.get(overlap.own)
            .is_some_and(|letter| supported[usize::from(letter)])
    });
    removed > 0
}

/// Enforces arc consistency with the AC-3 worklist algorithm.
///
/// Starts from `arcs`, or from every arc of the catalog when `arcs` is `None`
/// or empty, and processes them first-in first-out. Whenever revising `x -> y` shrinks
/// the domain of `x`, the arcs `z -> x` for every other neighbor `z` of `x`
/// are queued again.
///
/// Returns `false` as soon as a revision empties a domain, and `true` once the
/// queue runs dry. Only unsupported candidates are removed, so no complete
/// consistent assignment is ever lost.
///
/// # Examples
///
/// ```
/// use crossfill_core::{SlotCatalog, Structure, Vocabulary};
/// use crossfill_solver::{Domains, ac3, enforce_node_consistency};
///
/// let structure: Structure = "#_#\n___".parse()?;
/// let vocabulary: Vocabulary = "cat\ncar\narc\npa\nox".parse()?;
/// let catalog = SlotCatalog::new(structure, vocabulary);
///
/// let mut domains = Domains::new(&catalog);
/// enforce_node_consistency(&catalog, &mut domains);
/// assert!(ac3(&catalog, &mut domains, None));
/// // PA for the down slot, CAR and CAT for the across slot
/// assert_eq!(domains.total_candidates(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn ac3(catalog: &SlotCatalog, domains: &mut Domains, arcs: Option<Vec<Arc>>) -> bool {
    let mut stats = PropagationStats::default();
    ac3_with_stats(catalog, domains, arcs, &mut stats)
}

/// Same as [`ac3`], accumulating the work done into `stats`.
pub fn ac3_with_stats(
    catalog: &SlotCatalog,
    domains: &mut Domains,
    arcs: Option<Vec<Arc>>,
    stats: &mut PropagationStats,
) -> bool {
    let arcs = arcs
        .filter(|arcs| !arcs.is_empty())
        .unwrap_or_else(|| Arc::all(catalog));
    let mut queue = VecDeque::from(arcs);
    while let Some(Arc { from: x, to: y }) = queue.pop_front() {
        stats.revisions += 1;
        let before = domains.len(x);
        if !revise(catalog, domains, x, y) {
            continue;
        }
        stats.removals += before - domains.len(x);
        log::trace!(
            "revised {x} against {y}: {before} -> {} candidates",
            domains.len(x)
        );
        if domains.is_empty(x) {
            log::debug!("arc consistency emptied the domain of {}", catalog.slot(x));
            return false;
        }
        queue.extend(
            catalog
                .neighbors(x)
                .filter(|&z| z != y)
                .map(|z| Arc::new(z, x)),
        );
    }
    true
}
