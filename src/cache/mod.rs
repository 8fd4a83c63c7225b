//! Cache simulation.
//!
//! A simulated cache is a fixed number of frames and a replacement rule.
//! Feeding a reference string through it yields a [`FaultTally`].
//!
//! # Components
//! - [`Strategy`] - Selects and runs one of the four policies
//! - [`PerStrategy`] - One value per policy
//! - [`FaultTally`] / [`Outcome`] - Results of a run
//! - [`replacer`] - Eviction policy implementations

pub mod replacer;
mod stats;
mod strategy;

pub use stats::{FaultTally, Outcome};
pub use strategy::{PerStrategy, Strategy};
