//! Configuration constants for pagesim.

/// Number of references generated per page of a simulated process.
///
/// A process with `n` pages produces a reference string of `100 * n`
/// accesses. Long enough that cold-start faults stop dominating the
/// hit rate once the cache is warm.
pub const REFERENCES_PER_PAGE: usize = 100;

/// Seed used by the CLI when `--seed` is not given.
pub const DEFAULT_SEED: u64 = 0x5EED_CAFE;

/// Decimal places printed for hit rates in the report table.
pub const DEFAULT_PRECISION: usize = 6;

/// Length of the reference string generated for a process of `page_count` pages.
#[inline]
pub const fn reference_len(page_count: usize) -> usize {
    page_count * REFERENCES_PER_PAGE
}
