//! Eviction policy implementations (replacers).
//!
//! Currently implements:
//! - [`FifoReplacer`] - First-In-First-Out
//! - [`LruReplacer`] - Least Recently Used
//! - [`MruReplacer`] - Most Recently Used
//! - [`OptimalReplacer`] - Belady's optimal policy (needs the whole trace)
//!
//! Each replacer owns the full cache state of one simulation: the resident
//! set and whatever bookkeeping its eviction rule needs. [`run`] drives a
//! reference string through any of them.

mod fifo;
mod lru;
mod mru;
mod optimal;
mod recency;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use mru::MruReplacer;
pub use optimal::OptimalReplacer;

use crate::cache::FaultTally;
use crate::common::PageId;
use crate::reference::ReferenceString;

/// What happened on a single access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was resident.
    Hit,

    /// The page had to be loaded, pushing out `evicted` if the cache was full.
    Fault {
        /// The page that made room, if any.
        evicted: Option<PageId>,
    },
}

impl Access {
    /// True for [`Access::Fault`].
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, Access::Fault { .. })
    }
}

/// A fixed-capacity cache with a page replacement rule.
pub trait Replacer {
    /// Reference `page` at `position` in the trace.
    ///
    /// Positions must be fed in increasing order starting at 0; LRU and MRU
    /// use them as timestamps, OPTIMAL uses them to look up the next use.
    fn access(&mut self, position: usize, page: PageId) -> Access;

    /// True if `page` is currently resident.
    fn contains(&self, page: PageId) -> bool;

    /// Number of resident pages.
    fn len(&self) -> usize;

    /// Maximum number of resident pages.
    fn capacity(&self) -> usize;

    /// True if nothing is resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Feed every reference of `refs` through `replacer` and count faults.
pub fn run<R: Replacer + ?Sized>(replacer: &mut R, refs: &ReferenceString) -> FaultTally {
    let mut tally = FaultTally::default();

    for (position, &page) in refs.iter().enumerate() {
        tally.accesses += 1;
        if let Access::Fault { evicted } = replacer.access(position, page) {
            tally.faults += 1;
            if evicted.is_some() {
                tally.evictions += 1;
            }
        }
        debug_assert!(replacer.len() <= replacer.capacity());
    }
    tally
}
