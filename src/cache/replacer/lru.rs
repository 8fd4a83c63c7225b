//! LRU (Least Recently Used) replacement policy.

use super::recency::RecencyIndex;
use super::{Access, Replacer};
use crate::common::PageId;

/// Evicts the resident page whose last access is oldest.
///
/// Both hits and loads refresh a page's timestamp. Timestamps are trace
/// positions, so no two resident pages ever share one.
#[derive(Debug, Clone)]
pub struct LruReplacer {
    index: RecencyIndex,
    capacity: usize,
}

impl LruReplacer {
    /// Create a new LRU replacer holding at most `capacity` pages.
    pub fn new(capacity: usize) -> Self {
        Self {
            index: RecencyIndex::with_capacity(capacity),
            capacity,
        }
    }
}

impl Replacer for LruReplacer {
    fn access(&mut self, position: usize, page: PageId) -> Access {
        if self.index.contains(page) {
            self.index.touch(page, position);
            return Access::Hit;
        }
        if self.capacity == 0 {
            return Access::Fault { evicted: None };
        }

        let evicted = if self.index.len() == self.capacity {
            self.index.pop_oldest()
        } else {
            None
        };
        self.index.touch(page, position);
        Access::Fault { evicted }
    }

    fn contains(&self, page: PageId) -> bool {
        self.index.contains(page)
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(id: u32) -> PageId {
        PageId::new(id)
    }

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut replacer = LruReplacer::new(2);

        replacer.access(0, pid(1));
        replacer.access(1, pid(2));
        assert_eq!(replacer.access(2, pid(1)), Access::Hit);

        // Page 2 is now the least recently used
        assert_eq!(replacer.access(3, pid(3)), Access::Fault { evicted: Some(pid(2)) });
        assert!(replacer.contains(pid(1)));
        assert!(replacer.contains(pid(3)));
    }

    #[test]
    fn test_lru_zero_capacity() {
        let mut replacer = LruReplacer::new(0);
        assert_eq!(replacer.access(0, pid(1)), Access::Fault { evicted: None });
        assert_eq!(replacer.access(1, pid(1)), Access::Fault { evicted: None });
        assert!(replacer.is_empty());
    }
}
