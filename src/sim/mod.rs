//! Simulation drivers.
//!
//! # Components
//! - [`PageConfig`] - Page count and frame capacity for one page size
//! - [`ProcessSimulator`] - One trace through all four policies
//! - [`Aggregator`] - Running totals per page size
//! - [`SweepController`] - The page-size sweep, producing a [`SweepReport`]

mod aggregate;
mod page_config;
mod process;
mod sweep;

pub use aggregate::Aggregator;
pub use page_config::PageConfig;
pub use process::{ProcessReport, ProcessSimulator};
pub use sweep::{Row, SweepController, SweepParams, SweepReport};
