//! Reference strings and their generators.
//!
//! - [`ReferenceString`] - An immutable trace of page references
//! - [`ReferenceGenerator`] - Pluggable source of traces
//! - [`UniformGenerator`] - Seeded uniform random traces

mod generator;
mod reference_string;

pub use generator::{from_fn, FromFn, ReferenceGenerator, UniformGenerator};
pub use reference_string::ReferenceString;
