//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};

use super::{Access, Replacer};
use crate::common::PageId;

/// A FIFO eviction policy.
///
/// Evicts pages in the order they were loaded. Hits do not reorder
/// anything, which is what makes FIFO subject to Belady's anomaly.
#[derive(Debug, Clone)]
pub struct FifoReplacer {
    /// Queue of resident pages in load order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    resident: HashSet<PageId>,

    /// Maximum number of resident pages.
    capacity: usize,
}

impl FifoReplacer {
    /// Create a new FIFO replacer holding at most `capacity` pages.
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            resident: HashSet::with_capacity(capacity),
            capacity,
        }
    }
}

impl Replacer for FifoReplacer {
    fn access(&mut self, _position: usize, page: PageId) -> Access {
        if self.resident.contains(&page) {
            return Access::Hit;
        }
        if self.capacity == 0 {
            return Access::Fault { evicted: None };
        }

        let evicted = if self.resident.len() == self.capacity {
            let victim = self.queue.pop_front();
            if let Some(victim) = victim {
                self.resident.remove(&victim);
            }
            victim
        } else {
            None
        };

        self.queue.push_back(page);
        self.resident.insert(page);
        Access::Fault { evicted }
    }

    fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    fn len(&self) -> usize {
        self.resident.len()
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
    fn test_fifo_basic() {
        let mut replacer = FifoReplacer::new(3);

        assert_eq!(replacer.access(0, pid(1)), Access::Fault { evicted: None });
        assert_eq!(replacer.access(1, pid(2)), Access::Fault { evicted: None });
        assert_eq!(replacer.access(2, pid(3)), Access::Fault { evicted: None });
        assert_eq!(replacer.len(), 3);

        // Should evict in FIFO order
        assert_eq!(replacer.access(3, pid(4)), Access::Fault { evicted: Some(pid(1)) });
        assert_eq!(replacer.access(4, pid(5)), Access::Fault { evicted: Some(pid(2)) });
        assert!(!replacer.contains(pid(1)));
        assert!(replacer.contains(pid(3)));
    }

    #[test]
    fn test_fifo_reaccess_no_reorder() {
        let mut replacer = FifoReplacer::new(2);

        replacer.access(0, pid(1));
        replacer.access(1, pid(2));
        assert_eq!(replacer.access(2, pid(1)), Access::Hit); // Hit - should NOT reorder

        // FIFO: page 1 was first, should be evicted first
        assert_eq!(replacer.access(3, pid(3)), Access::Fault { evicted: Some(pid(1)) });
    }

    #[test]
    fn test_fifo_zero_capacity() {
        let mut replacer = FifoReplacer::new(0);

        assert_eq!(replacer.access(0, pid(1)), Access::Fault { evicted: None });
        assert_eq!(replacer.access(1, pid(1)), Access::Fault { evicted: None });
        assert!(replacer.is_empty());
    }
}
