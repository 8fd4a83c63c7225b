//! Recency index shared by the LRU and MRU replacers.

use std::collections::{BTreeSet, HashMap};

use crate::common::PageId;

/// Resident pages ordered by last access.
///
/// `stamps` maps each resident page to its last-access timestamp and
/// `order` holds the same pairs sorted by timestamp, so both the oldest
/// and the newest page can be popped in O(log k).
#[derive(Debug, Clone, Default)]
pub(super) struct RecencyIndex {
    stamps: HashMap<PageId, usize>,
    order: BTreeSet<(usize, PageId)>,
}

impl RecencyIndex {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            stamps: HashMap::with_capacity(capacity),
            order: BTreeSet::new(),
        }
    }

    /// Record an access to `page` at `timestamp`, inserting it if absent.
    pub(super) fn touch(&mut self, page: PageId, timestamp: usize) {
        if let Some(previous) = self.stamps.insert(page, timestamp) {
            self.order.remove(&(previous, page));
        }
        self.order.insert((timestamp, page));
    }

    /// Remove and return the least recently accessed page.
    pub(super) fn pop_oldest(&mut self) -> Option<PageId> {
        let (_, page) = self.order.pop_first()?;
        self.stamps.remove(&page);
        Some(page)
    }

    /// Remove and return the most recently accessed page.
    pub(super) fn pop_newest(&mut self) -> Option<PageId> {
        let (_, page) = self.order.pop_last()?;
        self.stamps.remove(&page);
        Some(page)
    }

    pub(super) fn contains(&self, page: PageId) -> bool {
        self.stamps.contains_key(&page)
    }

    pub(super) fn len(&self) -> usize {
        self.stamps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_reorders() {
        let mut index = RecencyIndex::with_capacity(3);
        index.touch(PageId::new(1), 0);
        index.touch(PageId::new(2), 1);
        index.touch(PageId::new(3), 2);
        index.touch(PageId::new(1), 3);

        assert_eq!(index.len(), 3);
        assert_eq!(index.pop_oldest(), Some(PageId::new(2)));
        assert_eq!(index.pop_newest(), Some(PageId::new(1)));
        assert_eq!(index.pop_oldest(), Some(PageId::new(3)));
        assert_eq!(index.pop_oldest(), None);
        assert!(!index.contains(PageId::new(3)));
    }
}
