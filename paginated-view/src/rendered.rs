#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::HashSet;

#[cfg(feature = "std")]
type IndexSet = HashSet<usize>;
#[cfg(not(feature = "std"))]
type IndexSet = BTreeSet<usize>;

/// Indexes of pages that have been mounted in full at least once.
///
/// The set only grows. It is not part of the change-notification state: inserting into it never
/// requests a re-render on its own.
#[derive(Clone, Debug, Default)]
pub(crate) struct RenderedSet {
    indexes: IndexSet,
}

impl RenderedSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `index` was not present before.
    pub(crate) fn insert(&mut self, index: usize) -> bool {
        self.indexes.insert(index)
    }

    pub(crate) fn contains(&self, index: usize) -> bool {
        self.indexes.contains(&index)
    }

    pub(crate) fn len(&self) -> usize {
        self.indexes.len()
    }

    pub(crate) fn sorted(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self.indexes.iter().copied().collect();
        out.sort_unstable();
        out
    }
}
