use crossfill_core::SlotCatalog;

use crate::Domains;

/// Removes every candidate whose length differs from its slot's length.
///
/// Never fails; a slot whose length no word has is left with an empty domain.
/// Running it a second time changes nothing.
///
/// Returns `true` if any candidate was removed.
///
/// # Examples
///
/// ```
/// use crossfill_core::{SlotCatalog, SlotId, Structure, Vocabulary};
/// use crossfill_solver::{Domains, enforce_node_consistency};
///
/// let structure: Structure = "____".parse()?;
/// let vocabulary: Vocabulary = "cat\nlion\nbear\nhorse".parse()?;
/// let catalog = SlotCatalog::new(structure, vocabulary);
///
/// let mut domains = Domains::new(&catalog);
/// assert!(enforce_node_consistency(&catalog, &mut domains));
/// assert_eq!(domains.len(SlotId::new(0)), 2);
/// assert!(!enforce_node_consistency(&catalog, &mut domains));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn enforce_node_consistency(catalog: &SlotCatalog, domains: &mut Domains) -> bool {
    let mut removed = 0;
    for id in catalog.slot_ids() {
        let length = catalog.slot(id).length();
        removed += domains.retain(id, |word| word.len() == length);
    }
    log::debug!(
        "node consistency removed {removed} candidates, {} remain",
        domains.total_candidates()
    );
    removed > 0
}
