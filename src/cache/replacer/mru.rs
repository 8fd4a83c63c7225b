//! MRU (Most Recently Used) replacement policy.
//!
//! The mirror image of LRU: on a fault with a full cache, the page touched
//! last is the one to go. Poor in general, but it beats LRU on cyclic scans
//! larger than the cache, where the newest page is the one needed furthest
//! in the future.

use super::recency::RecencyIndex;
use super::{Access, Replacer};
use crate::common::PageId;

/// Evicts the resident page whose last access is newest.
#[derive(Debug, Clone)]
pub struct MruReplacer {
    index: RecencyIndex,
    capacity: usize,
}

impl MruReplacer {
    /// Create a new MRU replacer holding at most `capacity` pages.
    pub fn new(capacity: usize) -> Self {
        Self {
            index: RecencyIndex::with_capacity(capacity),
            capacity,
        }
    }
}

impl Replacer for MruReplacer {
    fn access(&mut self, position: usize, page: PageId) -> Access {
        if self.index.contains(page) {
            self.index.touch(page, position);
            return Access::Hit;
        }
        if self.capacity == 0 {
            return Access::Fault { evicted: None };
        }

        let evicted = if self.index.len() == self.capacity {
            self.index.pop_newest()
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
