//! Process simulator - one trace through every policy.

use tracing::trace;

use crate::cache::{Outcome, PerStrategy, Strategy};
use crate::common::Result;
use crate::reference::{ReferenceGenerator, ReferenceString};
use crate::sim::PageConfig;

/// Per-strategy outcomes of one simulated process (or of a sum of them).
pub type ProcessReport = PerStrategy<Outcome>;

impl ProcessReport {
    /// A report where every strategy is not applicable.
    pub fn not_applicable() -> Self {
        PerStrategy::from_fn(|_| Outcome::NotApplicable)
    }

    /// Add `other` into this report, strategy by strategy.
    pub fn merge(&mut self, other: &ProcessReport) {
        for strategy in Strategy::ALL {
            self[strategy] += other[strategy];
        }
    }
}

/// Runs every strategy over the same trace under one [`PageConfig`].
///
/// Every strategy gets a fresh cache state of `frame_capacity` frames; none
/// of them can observe another's run.
///
/// # Example
/// ```
/// use pagesim::sim::{PageConfig, ProcessSimulator};
/// use pagesim::{ReferenceString, Strategy};
///
/// let config = PageConfig::derive(3, 5, 1);
/// let refs = ReferenceString::from_ids(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]).unwrap();
/// let report = ProcessSimulator::new(config).run(&refs);
///
/// assert_eq!(report[Strategy::Lru].tally().unwrap().faults, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSimulator {
    config: PageConfig,
}

impl ProcessSimulator {
    /// Create a simulator for `config`.
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }

    /// The configuration this simulator runs under.
    pub fn config(&self) -> PageConfig {
        self.config
    }

    /// Simulate every strategy over `refs`.
    ///
    /// Degenerate configurations return [`ProcessReport::not_applicable`]
    /// without running anything.
    pub fn run(&self, refs: &ReferenceString) -> ProcessReport {
        let Some(capacity) = self.config.frame_capacity() else {
            return ProcessReport::not_applicable();
        };

        let report = PerStrategy::from_fn(|strategy| {
            let tally = strategy.simulate(refs, capacity);
            trace!(%strategy, faults = tally.faults, accesses = tally.accesses, "strategy done");
            Outcome::Measured(tally)
        });

        debug_assert!(
            report
                .values()
                .all(|o| o.tally().map(|t| t.accesses) == Some(refs.len() as u64)),
            "strategies disagree on the access count"
        );
        report
    }

    /// Generate a trace with `generator` and simulate it.
    ///
    /// Degenerate configurations never call the generator.
    ///
    /// # Errors
    /// Propagates errors from the generator.
    pub fn run_with<G: ReferenceGenerator + ?Sized>(&self, generator: &mut G) -> Result<ProcessReport> {
        match self.config {
            PageConfig::Degenerate => Ok(ProcessReport::not_applicable()),
            PageConfig::Paged {
                page_count,
                frame_capacity,
                ..
            } => {
                let refs = generator.generate(page_count, frame_capacity)?;
                Ok(self.run(&refs))
            }
        }
    }
}
