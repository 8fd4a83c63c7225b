//! Strategy selection.
//!
//! [`Strategy`] names one of the four replacement policies and runs it.
//! [`PerStrategy`] is a fixed table with one slot per strategy.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::cache::replacer::{
    run, FifoReplacer, LruReplacer, MruReplacer, OptimalReplacer,
};
use crate::cache::FaultTally;
use crate::common::Error;
use crate::reference::ReferenceString;

/// A page replacement policy.
///
/// Variants are declared in report column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    /// Belady's optimal policy.
    Optimal,
    /// First-In-First-Out.
    Fifo,
    /// Least Recently Used.
    Lru,
    /// Most Recently Used.
    Mru,
}

impl Strategy {
    /// Number of strategies.
    pub const COUNT: usize = 4;

    /// Every strategy, in report column order.
    pub const ALL: [Strategy; Strategy::COUNT] =
        [Strategy::Optimal, Strategy::Fifo, Strategy::Lru, Strategy::Mru];

    /// Short name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Optimal => "OPT",
            Strategy::Fifo => "FIFO",
            Strategy::Lru => "LRU",
            Strategy::Mru => "MRU",
        }
    }

    /// Position of this strategy in [`Strategy::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Simulate this policy over `refs` with room for `capacity` pages.
    ///
    /// Each call builds a fresh cache state and drops it on return.
    ///
    /// # Example
    /// ```
    /// use pagesim::{ReferenceString, Strategy};
    ///
    /// let refs = ReferenceString::from_ids(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]).unwrap();
    /// assert_eq!(Strategy::Fifo.simulate(&refs, 3).faults, 9);
    /// assert_eq!(Strategy::Optimal.simulate(&refs, 3).faults, 7);
    /// ```
    pub fn simulate(self, refs: &ReferenceString, capacity: usize) -> FaultTally {
        match self {
            Strategy::Optimal => run(&mut OptimalReplacer::new(capacity, refs), refs),
            Strategy::Fifo => run(&mut FifoReplacer::new(capacity), refs),
            Strategy::Lru => run(&mut LruReplacer::new(capacity), refs),
            Strategy::Mru => run(&mut MruReplacer::new(capacity), refs),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OPT" | "OPTIMAL" => Ok(Strategy::Optimal),
            "FIFO" => Ok(Strategy::Fifo),
            "LRU" => Ok(Strategy::Lru),
            "MRU" => Ok(Strategy::Mru),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

/// One value per [`Strategy`], indexable by strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerStrategy<T>([T; Strategy::COUNT]);

impl<T> PerStrategy<T> {
    /// Build a table by evaluating `f` for every strategy in order.
    pub fn from_fn(mut f: impl FnMut(Strategy) -> T) -> Self {
        PerStrategy(std::array::from_fn(|i| f(Strategy::ALL[i])))
    }

    /// Iterate over `(strategy, value)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Strategy, &T)> {
        Strategy::ALL.into_iter().zip(self.0.iter())
    }

    /// Iterate over the values in report order.
    pub fn values(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T> Index<Strategy> for PerStrategy<T> {
    type Output = T;

    fn index(&self, strategy: Strategy) -> &T {
        &self.0[strategy.index()]
    }
}

impl<T> IndexMut<Strategy> for PerStrategy<T> {
    fn index_mut(&mut self, strategy: Strategy) -> &mut T {
        &mut self.0[strategy.index()]
    }
}
