//! Reference-string generators.
//!
//! The simulator does not care where a trace comes from, only that it has
//! `REFERENCES_PER_PAGE * page_count` elements in `1..=page_count`. Anything
//! implementing [`ReferenceGenerator`] can be plugged into a sweep.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::common::config::reference_len;
use crate::common::{Error, PageId, Result};
use crate::reference::ReferenceString;

/// Source of reference strings for simulated processes.
pub trait ReferenceGenerator {
    /// Produce the reference string of one process.
    ///
    /// `frame_capacity` is informational; generators may ignore it.
    fn generate(&mut self, page_count: usize, frame_capacity: usize) -> Result<ReferenceString>;
}

impl<G: ReferenceGenerator + ?Sized> ReferenceGenerator for &mut G {
    fn generate(&mut self, page_count: usize, frame_capacity: usize) -> Result<ReferenceString> {
        (**self).generate(page_count, frame_capacity)
    }
}

impl<G: ReferenceGenerator + ?Sized> ReferenceGenerator for Box<G> {
    fn generate(&mut self, page_count: usize, frame_capacity: usize) -> Result<ReferenceString> {
        (**self).generate(page_count, frame_capacity)
    }
}

/// Uniform random references over `1..=page_count`.
///
/// Seeded generators are reproducible: the same seed and call sequence
/// always yields the same traces.
#[derive(Debug, Clone)]
pub struct UniformGenerator {
    rng: SmallRng,
}

impl UniformGenerator {
    /// Create a generator with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the OS entropy source.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl ReferenceGenerator for UniformGenerator {
    fn generate(&mut self, page_count: usize, _frame_capacity: usize) -> Result<ReferenceString> {
        let max_page = u32::try_from(page_count).map_err(|_| {
            Error::invalid_parameter("page_count", format!("{page_count} exceeds u32 page IDs"))
        })?;

        let pages = (0..reference_len(page_count))
            .map(|_| PageId::new(self.rng.gen_range(1..=max_page)))
            .collect();
        ReferenceString::new(pages)
    }
}

/// Generator backed by a closure, like [`std::iter::from_fn`].
///
/// # Example
/// ```
/// use pagesim::reference::{from_fn, ReferenceGenerator};
/// use pagesim::ReferenceString;
///
/// let mut generator = from_fn(|_pages, _frames| ReferenceString::from_ids(&[1, 2, 1]));
/// assert_eq!(generator.generate(2, 1).unwrap().len(), 3);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut(usize, usize) -> Result<ReferenceString>,
{
    FromFn(f)
}

/// Generator returned by [`from_fn`].
#[derive(Debug, Clone)]
pub struct FromFn<F>(F);

impl<F> ReferenceGenerator for FromFn<F>
where
    F: FnMut(usize, usize) -> Result<ReferenceString>,
{
    fn generate(&mut self, page_count: usize, frame_capacity: usize) -> Result<ReferenceString> {
        (self.0)(page_count, frame_capacity)
    }
}
