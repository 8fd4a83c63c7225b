//! Fault statistics produced by a simulation run.

use std::fmt;
use std::ops::{Add, AddAssign};

/// Counters produced by feeding one reference string through one policy.
///
/// Unlike the buffer pool's live counters these are plain values: a tally is
/// produced once, at the end of a run, and only ever combined by addition.
///
/// # Example
/// ```
/// use pagesim::FaultTally;
///
/// let tally = FaultTally::new(3, 12, 0);
/// assert_eq!(tally.hits(), 9);
/// assert_eq!(tally.hit_rate(), 0.75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaultTally {
    /// Number of accesses that missed the cache.
    pub faults: u64,

    /// Number of accesses simulated (the reference string length).
    pub accesses: u64,

    /// Number of faults that had to push a resident page out.
    pub evictions: u64,
}

impl FaultTally {
    /// Create a tally from raw counts.
    pub fn new(faults: u64, accesses: u64, evictions: u64) -> Self {
        debug_assert!(faults <= accesses, "more faults than accesses");
        debug_assert!(evictions <= faults, "more evictions than faults");
        Self {
            faults,
            accesses,
            evictions,
        }
    }

    /// Number of accesses served from the cache.
    #[inline]
    pub fn hits(&self) -> u64 {
        self.accesses - self.faults
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits() as f64 / self.accesses as f64
        }
    }

    /// Calculate fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.faults as f64 / self.accesses as f64
        }
    }
}

impl Add for FaultTally {
    type Output = FaultTally;

    fn add(self, rhs: FaultTally) -> FaultTally {
        FaultTally {
            faults: self.faults + rhs.faults,
            accesses: self.accesses + rhs.accesses,
            evictions: self.evictions + rhs.evictions,
        }
    }
}

impl AddAssign for FaultTally {
    fn add_assign(&mut self, rhs: FaultTally) {
        *self = *self + rhs;
    }
}

impl fmt::Display for FaultTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tally {{ faults: {}, accesses: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.faults,
            self.accesses,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

/// Result of simulating one policy under one page-size configuration.
///
/// A page size of 0 has no meaningful page count or frame capacity; such
/// configurations report `NotApplicable` instead of a tally.
///
/// `NotApplicable` is the identity for `+`, so summing outcomes is
/// associative and commutative and an empty aggregate starts as
/// `NotApplicable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    /// The configuration was degenerate; nothing was simulated.
    #[default]
    NotApplicable,

    /// The policy ran and produced this tally.
    Measured(FaultTally),
}

impl Outcome {
    /// The tally, if the policy actually ran.
    #[inline]
    pub fn tally(&self) -> Option<FaultTally> {
        match self {
            Outcome::Measured(tally) => Some(*tally),
            Outcome::NotApplicable => None,
        }
    }

    /// True if this outcome carries a tally.
    #[inline]
    pub fn is_measured(&self) -> bool {
        matches!(self, Outcome::Measured(_))
    }

    /// Hit rate, or `None` for not-applicable outcomes.
    pub fn hit_rate(&self) -> Option<f64> {
        self.tally().map(|t| t.hit_rate())
    }
}

impl From<FaultTally> for Outcome {
    fn from(tally: FaultTally) -> Self {
        Outcome::Measured(tally)
    }
}

impl Add for Outcome {
    type Output = Outcome;

    fn add(self, rhs: Outcome) -> Outcome {
        match (self, rhs) {
            (Outcome::Measured(a), Outcome::Measured(b)) => Outcome::Measured(a + b),
            (Outcome::Measured(a), Outcome::NotApplicable)
            | (Outcome::NotApplicable, Outcome::Measured(a)) => Outcome::Measured(a),
            (Outcome::NotApplicable, Outcome::NotApplicable) => Outcome::NotApplicable,
        }
    }
}

impl AddAssign for Outcome {
    fn add_assign(&mut self, rhs: Outcome) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Measured(tally) => tally.fmt(f),
            Outcome::NotApplicable => write!(f, "N/A"),
        }
    }
}
