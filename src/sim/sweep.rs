//! Sweep controller - every page size, every process, every policy.
//!
//! ```text
//! SweepController::run
//!   for page_size in 0..=min(ram_size, process_size)
//!     PageConfig::derive ──▶ ProcessSimulator
//!       for each process: generate trace ──▶ 4 strategies ──▶ Aggregator::merge
//!   ──▶ SweepReport (one Row per page size)
//! ```
//!
//! The aggregator lives inside one `run` call and is handed over in the
//! returned [`SweepReport`]; nothing outlives the sweep.

use std::ops::RangeInclusive;

use tracing::{debug, info_span, trace};

use crate::cache::{Outcome, Strategy};
use crate::common::{Error, Result};
use crate::reference::ReferenceGenerator;
use crate::sim::{Aggregator, PageConfig, ProcessReport, ProcessSimulator};

/// Top-level parameters of a sweep.
///
/// All sizes share one unit (bytes, KiB, ... it does not matter, only
/// their ratios to the page size do).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepParams {
    ram_size: usize,
    process_count: usize,
    process_size: usize,
}

impl SweepParams {
    /// Validate and build sweep parameters.
    ///
    /// # Errors
    /// - `Error::InvalidParameter` if `process_count` is 0
    pub fn new(ram_size: usize, process_count: usize, process_size: usize) -> Result<Self> {
        if process_count == 0 {
            return Err(Error::invalid_parameter(
                "process_count",
                "at least one process is required",
            ));
        }
        Ok(Self {
            ram_size,
            process_count,
            process_size,
        })
    }

    /// Size of RAM.
    pub fn ram_size(&self) -> usize {
        self.ram_size
    }

    /// Number of processes simulated at each page size.
    pub fn process_count(&self) -> usize {
        self.process_count
    }

    /// Size of each process.
    pub fn process_size(&self) -> usize {
        self.process_size
    }

    /// Largest page size in the sweep.
    pub fn max_page_size(&self) -> usize {
        self.ram_size.min(self.process_size)
    }

    /// Page sizes visited by the sweep, starting at the degenerate 0.
    pub fn page_sizes(&self) -> RangeInclusive<usize> {
        0..=self.max_page_size()
    }

    /// Configuration for one page size.
    pub fn config_for(&self, page_size: usize) -> PageConfig {
        PageConfig::derive(self.ram_size, self.process_size, page_size)
    }
}

/// Aggregated results for one page size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The configuration simulated.
    pub config: PageConfig,

    /// Per-strategy totals over all processes.
    pub outcomes: ProcessReport,
}

impl Row {
    /// Page size of this row.
    pub fn page_size(&self) -> usize {
        self.config.page_size()
    }

    /// Total outcome of `strategy`.
    pub fn outcome(&self, strategy: Strategy) -> Outcome {
        self.outcomes[strategy]
    }

    /// Hit rate of `strategy`, `None` if not applicable.
    pub fn hit_rate(&self, strategy: Strategy) -> Option<f64> {
        self.outcomes[strategy].hit_rate()
    }
}

/// The result of a full sweep: parameters plus one row per page size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    params: SweepParams,
    rows: Vec<Row>,
}

impl SweepReport {
    /// Parameters the sweep ran with.
    pub fn params(&self) -> &SweepParams {
        &self.params
    }

    /// All rows, indexed by page size (row 0 is the degenerate page size).
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The row for `page_size`, if it was part of the sweep.
    pub fn row(&self, page_size: usize) -> Option<&Row> {
        self.rows.get(page_size)
    }

    /// Rows that were actually simulated.
    pub fn measured_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| !row.config.is_degenerate())
    }
}

/// Drives a sweep over every page size with an injected trace generator.
///
/// # Example
/// ```
/// use pagesim::sim::{SweepController, SweepParams};
/// use pagesim::reference::UniformGenerator;
///
/// let params = SweepParams::new(4, 2, 8).unwrap();
/// let report = SweepController::new(params, UniformGenerator::new(1)).run().unwrap();
///
/// // Page sizes 0 through 4
/// assert_eq!(report.rows().len(), 5);
/// ```
#[derive(Debug)]
pub struct SweepController<G> {
    params: SweepParams,
    generator: G,
}

impl<G: ReferenceGenerator> SweepController<G> {
    /// Create a controller for `params` drawing traces from `generator`.
    pub fn new(params: SweepParams, generator: G) -> Self {
        Self { params, generator }
    }

    /// Run the full sweep.
    ///
    /// # Errors
    /// Propagates errors from the generator; the sweep stops at the first one.
    pub fn run(&mut self) -> Result<SweepReport> {
        let params = self.params;
        let mut aggregator = Aggregator::new();
        let mut configs = Vec::with_capacity(params.max_page_size() + 1);

        debug!(?params, "starting sweep");
        for page_size in params.page_sizes() {
            let _span = info_span!("page_size", page_size).entered();
            let config = params.config_for(page_size);
            let simulator = ProcessSimulator::new(config);

            for process in 0..params.process_count() {
                let report = simulator.run_with(&mut self.generator)?;
                trace!(process, "merging process report");
                aggregator.merge(page_size, &report);
            }
            debug!(%config, "page size done");
            configs.push(config);
        }

        let rows = configs
            .into_iter()
            .zip(aggregator.into_rows())
            .map(|(config, outcomes)| Row { config, outcomes })
            .collect();
        Ok(SweepReport { params, rows })
    }

    /// Consume the controller, returning its generator.
    pub fn into_generator(self) -> G {
        self.generator
    }
}
