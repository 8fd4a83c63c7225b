//! Aggregator - cumulative per-page-size totals.

use crate::sim::ProcessReport;

/// Running totals of process reports, one row per sweep position.
///
/// Rows are created on first use: merging at an index past the end grows
/// the table, with any skipped rows left not applicable. Merging is plain
/// addition, so the order in which processes are merged does not matter.
///
/// # Example
/// ```
/// use pagesim::sim::{Aggregator, ProcessReport};
/// use pagesim::{FaultTally, Outcome, PerStrategy, Strategy};
///
/// let report: ProcessReport = PerStrategy::from_fn(|_| Outcome::from(FaultTally::new(2, 10, 1)));
/// let mut aggregator = Aggregator::new();
/// aggregator.merge(1, &report);
/// aggregator.merge(1, &report);
///
/// assert_eq!(aggregator.len(), 2);
/// assert_eq!(aggregator.row(1).unwrap()[Strategy::Fifo].tally().unwrap().faults, 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregator {
    rows: Vec<ProcessReport>,
}

impl Aggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `report` into the row at `index`.
    pub fn merge(&mut self, index: usize, report: &ProcessReport) {
        if index >= self.rows.len() {
            self.rows.resize_with(index + 1, ProcessReport::not_applicable);
        }
        self.rows[index].merge(report);
    }

    /// The row at `index`, if it exists.
    pub fn row(&self, index: usize) -> Option<&ProcessReport> {
        self.rows.get(index)
    }

    /// All rows in sweep order.
    pub fn rows(&self) -> &[ProcessReport] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if nothing has been merged.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the aggregator, returning its rows.
    pub fn into_rows(self) -> Vec<ProcessReport> {
        self.rows
    }
}
