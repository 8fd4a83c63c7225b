//! pagesim - Page replacement policy analyzer.
//!
//! Simulates FIFO, LRU, MRU and OPTIMAL page replacement over synthetic
//! reference strings, for every page size from 0 up to the smaller of the
//! RAM and process sizes, and reports per-policy hit rates.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Sweep (sim/)                                │   │
//! │  │   SweepController → ProcessSimulator → Aggregator        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Cache (cache/)  [Strategy enum]                    │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Replacers: OPT | FIFO | LRU | MRU               │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      FaultTally + Outcome                                │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Traces (reference/)                            │   │
//! │  │     ReferenceString + ReferenceGenerator                 │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`cache`] - Replacement policies and their statistics
//! - [`reference`] - Reference strings and generators
//! - [`sim`] - Process simulation, aggregation and the page-size sweep
//! - [`report`] - Text rendering of sweep results
//!
//! # Quick Start
//! ```
//! use pagesim::reference::UniformGenerator;
//! use pagesim::sim::{SweepController, SweepParams};
//! use pagesim::Strategy;
//!
//! let params = SweepParams::new(8, 4, 16).unwrap();
//! let report = SweepController::new(params, UniformGenerator::new(42))
//!     .run()
//!     .unwrap();
//!
//! let row = report.row(2).unwrap();
//! let opt = row.outcome(Strategy::Optimal).tally().unwrap();
//! let lru = row.outcome(Strategy::Lru).tally().unwrap();
//! assert!(opt.faults <= lru.faults);
//! ```

// Core modules
pub mod cache;
pub mod common;
pub mod reference;
pub mod sim;

pub mod report;

// Re-export commonly used items at crate root for convenience
pub use common::config::REFERENCES_PER_PAGE;
pub use common::{Error, PageId, Result};

pub use cache::{FaultTally, Outcome, PerStrategy, Strategy};
pub use reference::{ReferenceGenerator, ReferenceString, UniformGenerator};
pub use sim::{SweepController, SweepParams, SweepReport};
