//! Reference strings - the memory-access trace of one simulated process.

use std::collections::{HashMap, HashSet};

use crate::common::{Error, PageId, Result};

/// An immutable, ordered sequence of page references.
///
/// Every element is a valid (non-zero) [`PageId`]. The string is shared
/// read-only by all policies simulated over it, so each of them sees the
/// exact same trace.
///
/// # Example
/// ```
/// use pagesim::ReferenceString;
///
/// let refs = ReferenceString::from_ids(&[1, 2, 1, 3]).unwrap();
/// assert_eq!(refs.len(), 4);
/// assert_eq!(refs.distinct_pages(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReferenceString {
    pages: Box<[PageId]>,
}

impl ReferenceString {
    /// Build a reference string, rejecting the sentinel page ID.
    ///
    /// # Errors
    /// - `Error::InvalidPageId` if any element is `PageId::INVALID`
    pub fn new(pages: Vec<PageId>) -> Result<Self> {
        if let Some(bad) = pages.iter().find(|p| !p.is_valid()) {
            return Err(Error::InvalidPageId(bad.0));
        }
        Ok(Self {
            pages: pages.into_boxed_slice(),
        })
    }

    /// Build a reference string from raw page numbers.
    ///
    /// # Errors
    /// - `Error::InvalidPageId` if any element is 0
    pub fn from_ids(ids: &[u32]) -> Result<Self> {
        Self::new(ids.iter().copied().map(PageId::new).collect())
    }

    /// Number of references (the total access count of a simulation).
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True if the string has no references.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The references as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[PageId] {
        &self.pages
    }

    /// Iterate over the references in order.
    pub fn iter(&self) -> std::slice::Iter<'_, PageId> {
        self.pages.iter()
    }

    /// Number of distinct pages referenced.
    pub fn distinct_pages(&self) -> usize {
        self.pages.iter().collect::<HashSet<_>>().len()
    }

    /// Build the next-occurrence index.
    ///
    /// `next[i]` is the position of the next reference to the same page as
    /// position `i`, or `self.len()` if the page is never referenced again.
    /// Built with one right-to-left pass.
    pub fn next_occurrences(&self) -> Vec<usize> {
        let len = self.pages.len();
        let mut next = vec![len; len];
        let mut upcoming: HashMap<PageId, usize> = HashMap::new();

        for (position, &page) in self.pages.iter().enumerate().rev() {
            if let Some(following) = upcoming.insert(page, position) {
                next[position] = following;
            }
        }
        next
    }
}

impl<'a> IntoIterator for &'a ReferenceString {
    type Item = &'a PageId;
    type IntoIter = std::slice::Iter<'a, PageId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
