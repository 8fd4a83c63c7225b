//! OPTIMAL (Belady's MIN) replacement policy.
//!
//! Evicts the resident page whose next reference lies furthest in the
//! future, or that is never referenced again. It needs the whole trace up
//! front, so it is only usable in simulation, where it gives a lower bound
//! on faults for every other policy.
//!
//! # Bookkeeping
//! ```text
//! trace:   1  2  3  4  1  2  5  ...
//! next:    4  5  9 10  7  8 11  ...   (len = never again)
//!
//! by_next_use: BTreeSet<(next_use, PageId)>
//!   first() ─ needed soonest          last() ─ victim
//! ```
//! `next` is computed once per trace by
//! [`ReferenceString::next_occurrences`]. On every access the page's entry
//! moves to its next use, so each access costs O(log k).

use std::collections::{BTreeSet, HashMap};

use super::{Access, Replacer};
use crate::common::PageId;
use crate::reference::ReferenceString;

/// Belady's optimal replacement policy.
#[derive(Debug, Clone)]
pub struct OptimalReplacer {
    /// Position of the next reference for each trace position.
    next: Vec<usize>,

    /// Resident page -> position of its next reference.
    resident: HashMap<PageId, usize>,

    /// Resident pages ordered by next reference.
    ///
    /// The page ID keeps entries distinct when several pages are never
    /// referenced again and share the end-of-trace sentinel.
    by_next_use: BTreeSet<(usize, PageId)>,

    capacity: usize,
}

impl OptimalReplacer {
    /// Create an optimal replacer for `refs` holding at most `capacity` pages.
    ///
    /// Must be driven with the same `refs` it was built from.
    pub fn new(capacity: usize, refs: &ReferenceString) -> Self {
        Self {
            next: refs.next_occurrences(),
            resident: HashMap::with_capacity(capacity),
            by_next_use: BTreeSet::new(),
            capacity,
        }
    }
}

impl Replacer for OptimalReplacer {
    fn access(&mut self, position: usize, page: PageId) -> Access {
        let next_use = self.next[position];

        if let Some(slot) = self.resident.get_mut(&page) {
            debug_assert_eq!(*slot, position, "trace does not match the replacer");
            self.by_next_use.remove(&(*slot, page));
            *slot = next_use;
            self.by_next_use.insert((next_use, page));
            return Access::Hit;
        }
        if self.capacity == 0 {
            return Access::Fault { evicted: None };
        }

        let evicted = if self.resident.len() == self.capacity {
            let victim = self.by_next_use.pop_last().map(|(_, victim)| victim);
            if let Some(victim) = victim {
                self.resident.remove(&victim);
            }
            victim
        } else {
            None
        };

        self.resident.insert(page, next_use);
        self.by_next_use.insert((next_use, page));
        Access::Fault { evicted }
    }

    fn contains(&self, page: PageId) -> bool {
        self.resident.contains_key(&page)
    }

    fn len(&self) -> usize {
        self.resident.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
